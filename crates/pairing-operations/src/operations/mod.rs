mod check;

pub use check::{CheckInput, CheckOperation, CheckOutcome};
