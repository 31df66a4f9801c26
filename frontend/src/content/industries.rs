use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub tagline: &'static str,
    pub pain_points: &'static [&'static str],
    pub sample_message: &'static str,
}

impl Industry {
    pub fn href(&self) -> String {
        format!("/industries/{}", self.slug)
    }
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "hvac",
        name: "HVAC",
        icon: Icon::Thermometer,
        tagline: "Turn every tune-up and emergency call into a five-star review.",
        pain_points: &[
            "Techs finish the job and drive off before anyone asks for a review",
            "Happy customers forget about you until the next breakdown",
            "Competitors with more reviews win the map pack",
        ],
        sample_message: "Hi Dana, thanks for choosing Polar Air today! Mind sharing how Marcus did? It takes 30 seconds: {link}",
    },
    Industry {
        slug: "plumbing",
        name: "Plumbing",
        icon: Icon::Wrench,
        tagline: "Get reviewed while the relief of a fixed leak is still fresh.",
        pain_points: &[
            "Emergency customers call whoever ranks first",
            "Office staff have no time to chase reviews",
            "One angry review sits at the top for months",
        ],
        sample_message: "Thanks for letting FlowRight fix your water heater today. Would you leave us a quick review? {link}",
    },
    Industry {
        slug: "dental",
        name: "Dental Practices",
        icon: Icon::Tooth,
        tagline: "Fill your chairs with patients who found you through glowing reviews.",
        pain_points: &[
            "Patients are happy but rarely think to post",
            "Front desk teams feel awkward asking in person",
            "New patients compare ratings before booking",
        ],
        sample_message: "Thanks for visiting Bright Smile Dental! We'd love to hear about your visit: {link}",
    },
    Industry {
        slug: "auto-repair",
        name: "Auto Repair",
        icon: Icon::Car,
        tagline: "Build trust before drivers ever pull into your bay.",
        pain_points: &[
            "Drivers assume every shop overcharges",
            "Reviews mention only the rare bad experience",
            "Word of mouth no longer travels far enough",
        ],
        sample_message: "Your car is ready and running great! If we earned it, a review helps a ton: {link}",
    },
    Industry {
        slug: "salons",
        name: "Salons & Spas",
        icon: Icon::Scissors,
        tagline: "Let your clients' fresh looks do the marketing.",
        pain_points: &[
            "Clients rave in the chair and forget by the parking lot",
            "Stylists build personal followings but the salon profile stays quiet",
            "New clients browse photos and ratings first",
        ],
        sample_message: "Loving your new look? Tell others about your visit with Jess: {link}",
    },
    Industry {
        slug: "restaurants",
        name: "Restaurants",
        icon: Icon::Utensils,
        tagline: "Put a review link on every table and receipt.",
        pain_points: &[
            "Diners only post when something went wrong",
            "Tourists pick places by star rating",
            "Staff turnover makes consistent asking impossible",
        ],
        sample_message: "Thanks for dining with us tonight! Scan to tell us how we did.",
    },
    Industry {
        slug: "veterinary",
        name: "Veterinary Clinics",
        icon: Icon::Paw,
        tagline: "Pet parents trust other pet parents. Help them find you.",
        pain_points: &[
            "Emotional visits make asking for reviews feel wrong in the moment",
            "Clinics rely on referrals that are hard to scale",
            "Reviews go stale between annual checkups",
        ],
        sample_message: "Thanks for bringing Biscuit in today! How was your visit? {link}",
    },
    Industry {
        slug: "roofing",
        name: "Roofing",
        icon: Icon::Roof,
        tagline: "High-ticket jobs deserve a steady stream of social proof.",
        pain_points: &[
            "Homeowners research for weeks before signing",
            "Storm chasers flood the market with fake reviews",
            "Projects end weeks after the first handshake",
        ],
        sample_message: "Your new roof is done! Would you share your experience with your neighbours? {link}",
    },
    Industry {
        slug: "landscaping",
        name: "Landscaping",
        icon: Icon::Leaf,
        tagline: "Make your curb appeal visible online too.",
        pain_points: &[
            "Seasonal crews rarely meet the customer",
            "Recurring clients never get asked",
            "Spring rush leaves no time for follow-up",
        ],
        sample_message: "Your yard is looking sharp! If you're happy with the crew, leave us a review: {link}",
    },
    Industry {
        slug: "chiropractic",
        name: "Chiropractic",
        icon: Icon::Spine,
        tagline: "Turn relieved patients into your best referral source.",
        pain_points: &[
            "Patients feel better and stop thinking about you",
            "Insurance networks make you look like everyone else",
            "Skeptical first-timers read every review",
        ],
        sample_message: "Feeling better after today's adjustment? A quick review would mean a lot: {link}",
    },
    Industry {
        slug: "real-estate",
        name: "Real Estate",
        icon: Icon::Key,
        tagline: "Close the deal, then close the loop with a review.",
        pain_points: &[
            "Agents ask once at closing and never again",
            "Buyers and sellers both compare agent ratings",
            "Brokerage profiles hide individual agents",
        ],
        sample_message: "Congratulations on the new home! Would you tell others what working with Sam was like? {link}",
    },
    Industry {
        slug: "cleaning",
        name: "Cleaning Services",
        icon: Icon::Broom,
        tagline: "Sparkling homes, sparkling ratings.",
        pain_points: &[
            "Clients are often away while the team works",
            "Recurring visits make every day feel routine",
            "Price shoppers skip businesses with few reviews",
        ],
        sample_message: "Your home is sparkling! If the team did great, a review helps us grow: {link}",
    },
];

pub fn find_industry(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|industry| industry.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_and_lookup_finds_them() {
        let mut seen = HashSet::new();
        for industry in INDUSTRIES {
            assert!(seen.insert(industry.slug), "duplicate slug {}", industry.slug);
            assert_eq!(find_industry(industry.slug), Some(industry));
        }
        assert_eq!(find_industry("space-tourism"), None);
    }

    #[test]
    fn href_points_under_industries() {
        assert_eq!(INDUSTRIES[0].href(), "/industries/hvac");
    }
}
