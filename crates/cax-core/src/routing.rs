//! Static routing suggestions per document type.
//!
//! A total function from predicted-type identifiers to a `{team, reason}`
//! pair. Colocated with the renderer because it has no network dependency;
//! the table mirrors the classifier's closed type set with an explicit
//! default for anything unrecognized.

use serde::Serialize;

/// Which team a classified document should be routed to, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingSuggestion {
    pub team: &'static str,
    pub reason: &'static str,
}

/// Routing suggestion for a predicted document type.
///
/// Total over all inputs: unrecognized identifiers fall through to
/// "General Document Review".
#[must_use]
pub fn routing_suggestion(predicted_type: &str) -> RoutingSuggestion {
    match predicted_type {
        "claim_form" => RoutingSuggestion {
            team: "Claims Intake",
            reason: "Claim forms open the registration workflow and need an intake reviewer.",
        },
        "inspection_report" => RoutingSuggestion {
            team: "Field Assessment",
            reason: "Inspection reports go to the assessment team for damage verification.",
        },
        "invoice" => RoutingSuggestion {
            team: "Finance & Billing Review",
            reason: "Invoices need a billing reviewer to match amounts against the claim.",
        },
        "repair_estimate" => RoutingSuggestion {
            team: "Repair Network",
            reason: "Repair estimates are validated against approved workshop rates.",
        },
        _ => RoutingSuggestion {
            team: "General Document Review",
            reason: "Unrecognized or unclassified documents are triaged manually.",
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("claim_form", "Claims Intake")]
    #[case("inspection_report", "Field Assessment")]
    #[case("invoice", "Finance & Billing Review")]
    #[case("repair_estimate", "Repair Network")]
    #[case("other", "General Document Review")]
    fn known_types_route_to_their_team(#[case] predicted_type: &str, #[case] team: &str) {
        assert_eq!(routing_suggestion(predicted_type).team, team);
    }

    #[rstest]
    #[case("")]
    #[case("unknown_type")]
    #[case("INVOICE")] // identifiers are case-sensitive
    fn unseen_identifiers_get_the_default(#[case] predicted_type: &str) {
        let suggestion = routing_suggestion(predicted_type);
        assert_eq!(suggestion.team, "General Document Review");
        assert!(!suggestion.reason.is_empty());
    }
}
