use chrono::{Local, NaiveDate};

use crate::entities::{Client, ClientSummary, Payment, Project};

/// Derive per-client totals from already-loaded collections. Output order
/// follows the input client order; no sorting is imposed. A client with no
/// projects or payments yields an all-zero summary.
pub(crate) fn summarize(
    clients: &[Client],
    projects: &[Project],
    payments: &[Payment],
) -> Vec<ClientSummary> {
    clients
        .iter()
        .map(|client| summarize_client(client, projects, payments))
        .collect()
}

/// Totals for a single client, over collections that may contain other
/// clients' records (they are filtered out here).
pub(crate) fn summarize_client(
    client: &Client,
    projects: &[Project],
    payments: &[Payment],
) -> ClientSummary {
    let (total_projects, total_earned) = projects
        .iter()
        .filter(|p| p.client_id == client.id)
        .fold((0usize, 0f64), |(count, earned), p| {
            (count + 1, earned + p.total)
        });
    let total_paid: f64 = payments
        .iter()
        .filter(|p| p.client_id == client.id)
        .map(|p| p.amount)
        .sum();
    ClientSummary {
        client: client.clone(),
        total_projects,
        total_earned,
        total_paid,
        // Negative when overpaid; deliberately not clamped.
        outstanding_balance: total_earned - total_paid,
    }
}

/// Payments whose `date` falls on the given calendar day in the system's
/// local time zone, ignoring time of day.
pub(crate) fn payments_on_date(payments: &[Payment], date: NaiveDate) -> Vec<Payment> {
    payments
        .iter()
        .filter(|p| p.date.with_timezone(&Local).date_naive() == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::entities::RecordId;

    fn client(id: &str) -> Client {
        Client {
            id: id.into(),
            name: format!("Client {id}"),
            created_at: Utc::now(),
        }
    }

    fn project(client_id: &str, total: f64) -> Project {
        Project {
            id: RecordId::generate(),
            client_id: client_id.into(),
            number_of_videos: 1,
            charge_per_video: total,
            total,
            created_at: Utc::now(),
        }
    }

    fn payment_at(client_id: &str, amount: f64, date: DateTime<Utc>) -> Payment {
        Payment {
            id: RecordId::generate(),
            client_id: client_id.into(),
            amount,
            date,
            notes: None,
        }
    }

    fn payment(client_id: &str, amount: f64) -> Payment {
        payment_at(client_id, amount, Utc::now())
    }

    #[test]
    fn client_with_no_activity_summarizes_to_zero() {
        let summaries = summarize(&[client("a")], &[], &[]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_projects, 0);
        assert_eq!(summaries[0].total_earned, 0.0);
        assert_eq!(summaries[0].total_paid, 0.0);
        assert_eq!(summaries[0].outstanding_balance, 0.0);
    }

    #[test]
    fn totals_are_scoped_per_client_and_ordered_like_input() {
        let clients = [client("a"), client("b")];
        let projects = [project("a", 100.0), project("b", 40.0), project("a", 60.0)];
        let payments = [payment("a", 25.0), payment("b", 40.0)];

        let summaries = summarize(&clients, &projects, &payments);
        assert_eq!(summaries[0].client.id, "a".into());
        assert_eq!(summaries[0].total_projects, 2);
        assert_eq!(summaries[0].total_earned, 160.0);
        assert_eq!(summaries[0].total_paid, 25.0);
        assert_eq!(summaries[0].outstanding_balance, 135.0);
        assert_eq!(summaries[1].total_projects, 1);
        assert_eq!(summaries[1].outstanding_balance, 0.0);
    }

    #[test]
    fn overpayment_yields_negative_outstanding_balance() {
        let summaries = summarize(
            &[client("a")],
            &[project("a", 100.0)],
            &[payment("a", 150.0)],
        );
        assert_eq!(summaries[0].outstanding_balance, -50.0);
    }

    #[test]
    fn matches_by_local_calendar_day_regardless_of_time() {
        let last_minute = Local
            .with_ymd_and_hms(2024, 3, 1, 23, 59, 0)
            .unwrap()
            .with_timezone(&Utc);
        let first_second_next_day = Local
            .with_ymd_and_hms(2024, 3, 2, 0, 0, 1)
            .unwrap()
            .with_timezone(&Utc);
        let payments = [
            payment_at("a", 10.0, last_minute),
            payment_at("a", 20.0, first_second_next_day),
        ];

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let matched = payments_on_date(&payments, date);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].amount, 10.0);
    }
}
