pub mod csv;
pub mod traits;

pub use traits::{
    AppointmentStorage, Connection, ExpenseStorage, PaymentStorage, RetouchStorage, WorkerStorage,
};
