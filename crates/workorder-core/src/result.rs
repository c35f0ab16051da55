use crate::error::WorkOrderError;

pub type WorkOrderResult<T> = Result<T, WorkOrderError>;
