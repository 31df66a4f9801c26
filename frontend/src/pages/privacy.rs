use yew::prelude::*;

use crate::components::legal_document::LegalDocument;
use crate::icons::Icon;
use crate::scroll_spy::tracker::Section;

pub const PRIVACY_SECTIONS: &[Section] = &[
    Section { id: "overview", title: "Overview", icon: Icon::Info },
    Section { id: "information-we-collect", title: "Information We Collect", icon: Icon::Document },
    Section { id: "how-we-use-information", title: "How We Use Information", icon: Icon::Gears },
    Section { id: "sms-messaging", title: "SMS Messaging", icon: Icon::Message },
    Section { id: "sharing", title: "Sharing and Processors", icon: Icon::Handshake },
    Section { id: "data-retention", title: "Data Retention", icon: Icon::Lock },
    Section { id: "your-rights", title: "Your Rights", icon: Icon::Shield },
    Section { id: "contact", title: "Contact Us", icon: Icon::Question },
];

const PRIVACY_BODIES: &[&[&str]] = &[
    &[
        "This policy explains what information MoreStars collects when you visit our website or use our review request service, and how we handle it.",
    ],
    &[
        "Account information you give us: your name, business name, email address and billing details.",
        "Customer contact details you upload or sync so we can send review requests on your behalf, typically a first name and phone number.",
        "Usage information such as pages visited, messages sent and review link clicks.",
    ],
    &[
        "We use your information to provide the service, send review requests you schedule, show you analytics, and keep your account secure.",
        "We do not sell personal information and we never use your customers' contact details for our own marketing.",
    ],
    &[
        "Review requests are sent only to numbers you provide. Every message includes opt-out instructions, and opt-outs are honoured across all businesses on our platform.",
    ],
    &[
        "We rely on trusted processors to deliver messages and take payments. They may only use data to perform services for us.",
    ],
    &[
        "Customer contact details are deleted 90 days after their last review request unless you remove them sooner. Account data is kept while your account is active.",
    ],
    &[
        "You can access, correct, export or delete your data at any time from your dashboard or by contacting us. Depending on where you live you may have additional rights under local law.",
    ],
    &["Questions about privacy? Email privacy@morestars.io."],
];

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalDocument
            title="Privacy Policy"
            last_updated="January 15, 2025"
            sections={PRIVACY_SECTIONS}
            bodies={PRIVACY_BODIES}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_body() {
        assert_eq!(PRIVACY_SECTIONS.len(), PRIVACY_BODIES.len());
    }
}
