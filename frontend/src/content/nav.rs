use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/", icon: Icon::Home },
    NavLink { label: "How It Works", href: "/how-it-works", icon: Icon::Gears },
    NavLink { label: "Pricing", href: "/pricing", icon: Icon::Tag },
    NavLink { label: "Industries", href: "/industries", icon: Icon::Building },
    NavLink { label: "Blog", href: "/blog", icon: Icon::Newspaper },
    NavLink { label: "About", href: "/about", icon: Icon::Info },
    NavLink { label: "FAQ", href: "/faq", icon: Icon::Question },
    NavLink { label: "Partners", href: "/partners", icon: Icon::Handshake },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "/privacy", icon: Icon::Lock },
    NavLink { label: "Terms of Service", href: "/terms", icon: Icon::Scale },
];
