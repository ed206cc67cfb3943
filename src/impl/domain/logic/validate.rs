use crate::errors::LedgerError;

// Form-level validation, applied before any store call so a rejected input
// never changes persisted state.

/// Returns the trimmed name, rejecting names that are empty after trimming.
pub(crate) fn client_name(name: &str) -> Result<String, LedgerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyClientName);
    }
    Ok(trimmed.to_string())
}

pub(crate) fn project_terms(number_of_videos: u32, charge_per_video: f64) -> Result<(), LedgerError> {
    if number_of_videos == 0 {
        return Err(LedgerError::InvalidVideoCount);
    }
    if !charge_per_video.is_finite() || charge_per_video <= 0.0 {
        return Err(LedgerError::InvalidChargePerVideo {
            amount: charge_per_video,
        });
    }
    Ok(())
}

pub(crate) fn payment_amount(amount: f64) -> Result<(), LedgerError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidPaymentAmount { amount });
    }
    Ok(())
}

/// Empty or whitespace-only notes collapse to `None`; "no notes" is an absent
/// value, not an empty string, in storage and export alike.
pub(crate) fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_name_is_trimmed() {
        assert_eq!(client_name("  Acme Studios ").unwrap(), "Acme Studios");
    }

    #[test]
    fn blank_client_name_is_rejected() {
        assert!(matches!(client_name("   "), Err(LedgerError::EmptyClientName)));
    }

    #[test]
    fn zero_videos_and_non_positive_rates_are_rejected() {
        assert!(matches!(
            project_terms(0, 20.0),
            Err(LedgerError::InvalidVideoCount)
        ));
        assert!(matches!(
            project_terms(5, 0.0),
            Err(LedgerError::InvalidChargePerVideo { .. })
        ));
        assert!(matches!(
            project_terms(5, f64::NAN),
            Err(LedgerError::InvalidChargePerVideo { .. })
        ));
        assert!(project_terms(5, 20.0).is_ok());
    }

    #[test]
    fn non_positive_payment_amounts_are_rejected() {
        assert!(matches!(
            payment_amount(-1.0),
            Err(LedgerError::InvalidPaymentAmount { .. })
        ));
        assert!(payment_amount(0.01).is_ok());
    }

    #[test]
    fn notes_normalize_absence_and_blankness_to_none() {
        assert_eq!(normalize_notes(None), None);
        assert_eq!(normalize_notes(Some("".to_string())), None);
        assert_eq!(normalize_notes(Some("  ".to_string())), None);
        assert_eq!(
            normalize_notes(Some(" wire transfer ".to_string())),
            Some("wire transfer".to_string())
        );
    }
}
