//! Error macros for marquee

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MarqueeError::invalid_value($context, $value))
    };
}

/// Macro for creating fatal empty-corpus errors
#[macro_export]
macro_rules! bail_empty {
    ($stage:expr) => {
        return Err($crate::error::MarqueeError::empty_corpus($stage))
    };
}
