use super::{client::Client, payment::Payment, project::Project};

/// Derived per-client totals; computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub client: Client,
    pub total_projects: usize,
    pub total_earned: f64,
    pub total_paid: f64,
    /// Earned minus paid. Negative when the client has overpaid.
    pub outstanding_balance: f64,
}

/// A client together with its full project and payment history.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetail {
    pub client: Client,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}
