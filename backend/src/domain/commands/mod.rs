//! Command and query objects accepted by the domain services, together with
//! their result shapes. Presentation layers build these from user input;
//! validation happens in the services.

pub mod appointments;
pub mod expenses;
pub mod payments;
pub mod reports;
pub mod retouches;
pub mod workers;
