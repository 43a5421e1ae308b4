//! Error macros for graphwalk

/// Macro for returning an invalid edge weight error
#[macro_export]
macro_rules! bail_weight {
    ($from:expr, $to:expr, $weight:expr) => {
        return Err($crate::error::GraphError::InvalidWeight {
            from: $from.to_string(),
            to: $to.to_string(),
            weight: $weight,
        })
    };
}

/// Macro for returning a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
