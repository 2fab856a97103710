use thiserror::Error;

#[derive(Error, Debug)]
pub enum CometaError {
    #[error("Invalid orbital element {field}: {value}")]
    InvalidElement { field: &'static str, value: f64 },

    #[error("Orbit sampling aborted at sample {index}")]
    ComputationAborted {
        index: usize,
        #[source]
        source: Box<CometaError>,
    },

    #[error("Non-finite coordinate handed to {context}")]
    NonFiniteResult { context: &'static str },

    #[error("Kepler equation solver failed to converge: {0}")]
    KeplerConvergenceFailed(#[from] roots::SearchError),

    #[error("Invalid closest-approach search window: {window_days} days")]
    InvalidSearchWindow { window_days: f64 },
}

impl PartialEq for CometaError {
    fn eq(&self, other: &Self) -> bool {
        use CometaError::*;
        match (self, other) {
            (
                InvalidElement { field: f1, value: v1 },
                InvalidElement { field: f2, value: v2 },
            ) => f1 == f2 && (v1 == v2 || (v1.is_nan() && v2.is_nan())),

            (
                ComputationAborted { index: i1, source: s1 },
                ComputationAborted { index: i2, source: s2 },
            ) => i1 == i2 && s1 == s2,

            (NonFiniteResult { context: c1 }, NonFiniteResult { context: c2 }) => c1 == c2,

            // Solver errors are compared by variant only
            (KeplerConvergenceFailed(_), KeplerConvergenceFailed(_)) => true,

            (
                InvalidSearchWindow { window_days: w1 },
                InvalidSearchWindow { window_days: w2 },
            ) => w1 == w2,

            _ => false,
        }
    }
}
