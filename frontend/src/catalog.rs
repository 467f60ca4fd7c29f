//! Case studies shown on the home and work pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub gallery: &'static [&'static str],
    pub video_embed_url: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub client: &'static str,
    pub year: u16,
    pub services: &'static [&'static str],
}

static PROJECTS: &[Project] = &[
    Project {
        id: "clinic-intake-assistant",
        title: "Clinic Intake Assistant",
        description: "A voice and chat assistant that gathers patient history before the first appointment.",
        long_description: "A regional physiotherapy group was losing the first ten minutes of every visit to paperwork. \
            We built an intake assistant that talks patients through their history by phone or chat, \
            writes a structured summary into the practice system and flags anything a clinician should see first. \
            Front-desk call volume dropped by a third within two months.",
        image: "/assets/projects/clinic-intake.webp",
        gallery: &[
            "/assets/projects/clinic-intake-summary.webp",
            "/assets/projects/clinic-intake-chat.webp",
        ],
        video_embed_url: Some("https://www.youtube-nocookie.com/embed/3Kq1MIfTWCE"),
        tags: &["Healthcare", "AI Automation", "Voice"],
        featured: true,
        client: "Northshore Physio",
        year: 2024,
        services: &["AI Integration", "Conversation Design", "EHR Integration"],
    },
    Project {
        id: "listing-copy-studio",
        title: "Listing Copy Studio",
        description: "Property descriptions drafted from photos and agent notes in under a minute.",
        long_description: "Agents upload photos and a few bullet points; the studio drafts a listing in the \
            brokerage's house style, checks it against fair-housing wording rules and hands it back for a final edit. \
            The team now publishes listings the same day they are signed.",
        image: "/assets/projects/listing-studio.webp",
        gallery: &["/assets/projects/listing-studio-editor.webp"],
        video_embed_url: None,
        tags: &["Real Estate", "Generative AI"],
        featured: true,
        client: "Harbor & Vine Realty",
        year: 2024,
        services: &["Custom AI Development", "Prompt Engineering"],
    },
    Project {
        id: "contract-review-triage",
        title: "Contract Review Triage",
        description: "First-pass review of vendor contracts that routes only unusual clauses to counsel.",
        long_description: "A small in-house legal team was reading every vendor agreement end to end. \
            We set up a pipeline that extracts key clauses, compares them with the company's playbook and \
            produces a one-page brief. Routine contracts now clear in a day instead of a week.",
        image: "/assets/projects/contract-triage.webp",
        gallery: &[],
        video_embed_url: None,
        tags: &["Legal", "Document AI"],
        featured: false,
        client: "Confidential SaaS company",
        year: 2023,
        services: &["AI Strategy", "Document Processing"],
    },
    Project {
        id: "bookkeeping-autopilot",
        title: "Bookkeeping Autopilot",
        description: "Receipt capture and categorisation that keeps the books reconciled every week.",
        long_description: "Receipts arrive by email or photo, get read, categorised and matched to bank \
            transactions automatically. Anything the model is unsure about lands in a short weekly review queue \
            for the accountant rather than piling up until quarter end.",
        image: "/assets/projects/bookkeeping.webp",
        gallery: &["/assets/projects/bookkeeping-queue.webp"],
        video_embed_url: None,
        tags: &["Finance & Accounting", "AI Automation"],
        featured: true,
        client: "Ledgerlight Accounting",
        year: 2023,
        services: &["AI Automation", "Workflow Design"],
    },
    Project {
        id: "storefront-concierge",
        title: "Storefront Concierge",
        description: "A shopping assistant that answers sizing and stock questions from the live catalogue.",
        long_description: "The concierge answers product questions using the shop's own catalogue, \
            stock levels and return policy, and hands over to a human with the full conversation when it \
            cannot help. Support tickets about sizing fell by half.",
        image: "/assets/projects/storefront.webp",
        gallery: &[],
        video_embed_url: Some("https://www.youtube-nocookie.com/embed/Lp9xw7c2eZk"),
        tags: &["Retail & E-commerce", "Chatbots & Virtual Assistants"],
        featured: false,
        client: "Fieldcraft Outdoor",
        year: 2024,
        services: &["Chatbots & Virtual Assistants", "AI Integration"],
    },
];

pub fn all_projects() -> &'static [Project] {
    PROJECTS
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn projects_tagged(tag: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}

/// Every tag in first-seen order, for the filter bar.
pub fn all_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in PROJECTS.iter().flat_map(|p| p.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
