use yew::prelude::*;

use crate::components::legal_document::LegalDocument;
use crate::icons::Icon;
use crate::scroll_spy::tracker::Section;

pub const TERMS_SECTIONS: &[Section] = &[
    Section { id: "acceptance", title: "Acceptance of Terms", icon: Icon::Document },
    Section { id: "the-service", title: "The Service", icon: Icon::Star },
    Section { id: "accounts", title: "Accounts", icon: Icon::Key },
    Section { id: "acceptable-use", title: "Acceptable Use", icon: Icon::Shield },
    Section { id: "messaging-consent", title: "Messaging Consent", icon: Icon::Message },
    Section { id: "billing-terms", title: "Billing", icon: Icon::Card },
    Section { id: "termination", title: "Termination", icon: Icon::Lock },
    Section { id: "liability", title: "Limitation of Liability", icon: Icon::Scale },
    Section { id: "changes", title: "Changes to These Terms", icon: Icon::Info },
];

const TERMS_BODIES: &[&[&str]] = &[
    &["By creating an account or using MoreStars you agree to these terms. If you use MoreStars on behalf of a business, you accept them for that business."],
    &["MoreStars sends review requests by SMS and provides QR codes and analytics that help you collect reviews on Google."],
    &["You are responsible for your login credentials and for everything that happens under your account."],
    &[
        "You may not use MoreStars to offer incentives for reviews, to filter which customers are asked, or to send messages unrelated to review requests.",
        "You may not upload contact details you are not entitled to use.",
    ],
    &["You confirm that every customer you message has provided their number in connection with a transaction with your business and has not opted out."],
    &[
        "Subscriptions renew automatically each month until cancelled. Fees are non-refundable except where required by law.",
        "Unused message allowances do not roll over.",
    ],
    &["You can cancel at any time. We may suspend accounts that break these terms or put our messaging reputation at risk."],
    &["MoreStars is provided as is. To the extent allowed by law, our total liability is limited to the fees you paid in the three months before a claim."],
    &["We may update these terms. We'll notify you by email at least 14 days before material changes take effect."],
];

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalDocument
            title="Terms of Service"
            last_updated="January 15, 2025"
            sections={TERMS_SECTIONS}
            bodies={TERMS_BODIES}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_section_has_a_body_and_unique_anchor() {
        assert_eq!(TERMS_SECTIONS.len(), TERMS_BODIES.len());
        let ids: HashSet<&str> = TERMS_SECTIONS.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), TERMS_SECTIONS.len());
    }
}
