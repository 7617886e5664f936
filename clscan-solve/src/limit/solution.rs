/// How the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width satisfied the combined absolute/relative rule.
    Converged,
    /// A midpoint landed within `cls_accuracy` of the target and was
    /// accepted directly as the limit.
    Lucky,
}

/// The result of a limit search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
    /// Upper limit on the signal strength `r`.
    pub limit: f64,
    /// Half the final bracket width.
    pub half_width: f64,
    /// Terminal state of the search.
    pub status: Status,
    /// Bisection iterations performed.
    pub iters: usize,
}
