//! HTTP request handlers.
//!
//! Handlers convert request bodies into validated parameters, call the matching
//! service, and convert the resulting domain models into DTOs. Every handler is
//! annotated with `#[utoipa::path]` so it appears in the OpenAPI document.

pub mod bill;
pub mod team;
pub mod tournament;

#[cfg(test)]
mod test;
