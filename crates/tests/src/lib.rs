#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod bearer_header_tests;

#[cfg(test)]
mod token_refresh_tests;

#[cfg(test)]
mod session_expiry_tests;

#[cfg(test)]
mod consultation_tests;

#[cfg(test)]
mod lawyer_tests;
