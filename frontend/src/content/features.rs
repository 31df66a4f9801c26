use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub summary: &'static str,
}

/// The two product features that get their own search entries.
pub const FEATURES: &[Feature] = &[
    Feature {
        name: "SMS Review Requests",
        href: "/how-it-works",
        icon: Icon::Message,
        summary: "Send a friendly text with your Google review link the moment a job is done.",
    },
    Feature {
        name: "QR Code Review Cards",
        href: "/how-it-works",
        icon: Icon::QrCode,
        summary: "Printable counter cards and stickers that open your review page in one scan.",
    },
];
