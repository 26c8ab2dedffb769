//! Static marketing copy for the AccrueFlow landing page.
//!
//! Everything on the page except the emblem is data: section headings,
//! signal cards, trust pillars, the delivery timeline, and the intake form
//! field definitions. Keeping it in one module keeps the layout code free
//! of string literals.

/// One card in the "Intelligence Engine" grid.
pub struct Signal {
    pub label: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

/// One card in the trust-pillar band.
pub struct Pillar {
    pub title: &'static str,
    pub copy: &'static str,
    pub stat: &'static str,
}

/// One stage in the delivery timeline.
pub struct Stage {
    pub title: &'static str,
    pub body: &'static str,
    pub duration: &'static str,
}

/// Kind of input control an intake field renders as.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Multiline,
}

/// One labeled field of the secure-intake form.
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

pub const BRAND: &str = "AccrueFlow™";
pub const BRAND_SUB: &str = "Timeless Intelligence Platform";
pub const CIPHERLINE: &str = "Client Cipherline 011A";

pub const HERO_EYEBROW: &str = "Digital Private Bank, Intelligence Division";
pub const HERO_TITLE: &str =
    "Frictionless confidence for design & engineering command.";
pub const HERO_LEAD: &str = "AccrueFlow v2.0 is the no-contact intelligence \
vault issuing $15k dossiers in under three hours. Absolute trust, executed \
without a single call.";

pub const ASSURANCE_BADGES: &[&str] = &[
    "Sovereign Compute Cells",
    "Quantum-Resistant Key Exchange",
    "Bias Adversary Simulation",
    "Dynamic Chain-of-Trust Audit",
];

pub const CONFIDENCE_INDEX: &str = "99.972%";

pub const SIGNALS_EYEBROW: &str = "The Intelligence Engine";
pub const SIGNALS_TITLE: &str = "Frictionless truth. No consultants. No exposure.";
pub const SIGNALS_LEDE: &str = "Your intelligence bank executes through \
autonomous validation, zero-bias synthesis, and vault-grade compliance. \
Every dossier is a living asset that updates as reality changes.";

pub const SIGNALS: &[Signal] = &[
    Signal {
        label: "Bias-Neutral Intelligence Stack",
        description: "Cross-checks 12,400+ data feeds with adversarial \
modeling to surface absolute truth.",
        metric: "12,400+ feeds",
    },
    Signal {
        label: "Autonomous Trust Layer",
        description: "Zero-contact dossier orchestration with full \
cryptographic audit and lineage trail.",
        metric: "Zero calls",
    },
    Signal {
        label: "Precision Confidence Index",
        description: "Each insight is stamped with a living confidence \
range, recalibrated every 11 minutes.",
        metric: "99.972% certainty",
    },
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Bank-Grade Segmentation",
        copy: "Each dossier is isolated in sovereign compute cells with \
AI-augmented compliance, ensuring asset-class separation every millisecond.",
        stat: "Tier 4 isolation",
    },
    Pillar {
        title: "Unbiased Insight Engine",
        copy: "We use multi-agent red teaming and ensemble benchmarking to \
vaporize consultant bias. Decisions land from empirical truth, not opinion.",
        stat: "Triangulated consensus",
    },
    Pillar {
        title: "Frictionless Delivery",
        copy: "Encrypted vault delivery with executable intelligence modules \
that plug into design systems and engineering command centers instantly.",
        stat: "< 180 min issuance",
    },
];

pub const TIMELINE_EYEBROW: &str = "Timeless Delivery";
pub const TIMELINE_TITLE: &str =
    "Precise, orchestrated, and fully audited in 24 minutes.";

pub const TIMELINE: &[Stage] = &[
    Stage {
        title: "Precision Intake",
        body: "Secure, structured intake tokens capture objectives, \
constraints, and trust preferences without human exposure.",
        duration: "02:38",
    },
    Stage {
        title: "Autonomous Synthesis",
        body: "Multi-rail neural arbitration fuses qualitative signals with \
telemetry to build a weighted intelligence corpus.",
        duration: "07:46",
    },
    Stage {
        title: "Verification & Stress Test",
        body: "Models are stress-tested against synthetic adversaries. Weak \
signals are quarantined and reprocessed.",
        duration: "11:03",
    },
    Stage {
        title: "Vault Delivery",
        body: "Executable dossier delivered into your zero-trust vault with \
living update channel and compliance chain.",
        duration: "02:00",
    },
];

pub const INTAKE_EYEBROW: &str = "Zero-Contact Dossier Issuance";
pub const INTAKE_TITLE: &str = "The vault handshake that never touches a phone.";
pub const INTAKE_LEDE: &str = "Submit encrypted objectives, receive a fully \
executed intelligence dossier through your chosen quantum defense channel. \
Every stage is logged across a tamper-evident ledger.";

pub const INTAKE_BULLETS: &[&str] = &[
    "Multi-factor entropy scoring ensures the vault only opens for verified principals.",
    "All payloads processed in sovereign compute cells with deterministic lineage.",
    "Delivery options include secure inbox, hardened API, or cold-storage artifact.",
];

pub const FORM_TAGLINE: &str = "Secure Intake — Tier Zero Touch";
pub const FORM_TITLE: &str = "Gold-Standard Vault Entry";
pub const FORM_LEDE: &str = "No calls. No calendars. Our vault-grade intake \
orchestrates context, risk posture, and delivery channels without human \
exposure.";
pub const FORM_CTA: &str = "Initiate Zero-Trust Dossier";
pub const FORM_FOOTNOTE: &str = "Response dossier generated & delivered in \
under 180 minutes via quantum-encrypted channel.";
pub const FORM_BADGE_TOP: &str = "Verified";
pub const FORM_BADGE_MAIN: &str = "ISO/IEC 27001";

/// Sensitivity tiers for the single-select band field.
pub const BANDS: &[&str] = &[
    "Tier ∅ — Public Summary",
    "Tier 1 — Executive Distribution",
    "Tier 2 — Board & Counsel",
    "Tier Φ — Black Chamber",
];

pub const FIELDS: &[Field] = &[
    Field {
        id: "identity",
        label: "Identity Verification",
        placeholder: "Your full legal name",
        kind: FieldKind::Text,
    },
    Field {
        id: "organization",
        label: "Organization Matrix",
        placeholder: "Primary entity & reporting line",
        kind: FieldKind::Text,
    },
    Field {
        id: "objective",
        label: "Mission Objective",
        placeholder: "e.g. \u{201c}Launch design system in LATAM Q2\u{201d}",
        kind: FieldKind::Text,
    },
    Field {
        id: "sensitivity",
        label: "Sensitivity Band",
        placeholder: "Select band",
        kind: FieldKind::Select,
    },
    Field {
        id: "channels",
        label: "Secure Return Channel",
        placeholder: "Zero-trust inbox / PGP fingerprint",
        kind: FieldKind::Multiline,
    },
];

pub const FOOTER_BRAND_SUB: &str = "Digital Private Bank";
