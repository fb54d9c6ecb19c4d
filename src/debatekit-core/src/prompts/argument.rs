//! Argument-package prompt: per-side contentions, rhetoric, evidence prompts,
//! weighing, cross-ex and analogy variations.

use super::{banlist_text, custom_directive};
use crate::message::Message;
use crate::style::Novelty;

const SYSTEM_COACH: &str = r#"You are a Congressional Debate coach.
Task: Given a bill, produce unique Affirmation and Negation packages: arguments (with warrants), evidence prompts, creative rhetoric (hooks/analogies), and weighing/crystallization lines.
Constraints:
- Clean structure; tight warrants; explicit impacts; "what this means" bridges; crisp crystallization.
- Each contention must follow: Claim → Mechanism (2–3 concrete steps) → Impact → "what this means".
- Always include Weighing using: probability • timeframe • irreversibility/distribution.
- Avoid cliché phrasing; use domain-grounded analogies; vary sentence length (10–22 words).
Output schema:
[BILL SUMMARY – 1–2 lines]

AFFIRMATION
• Contentions (3): [claim] — [mechanism] — [impact] — [what this means]
• Rhetoric: Hook | Analogy | Crystallization line
• Evidence Prompts: (3–5, by source type/topic + what to pull)
• Weighing: probability • timeframe • irreversibility/distribution

NEGATION
• Contentions (3): [claim] — [mechanism] — [impact] — [what this means]
• Rhetoric: Hook | Analogy | Crystallization line
• Evidence Prompts: (3–5)
• Weighing: probability • timeframe • irreversibility/distribution

QUICK QX PACK
• 5 cross-questions targeting key mechanisms/links/impacts

ANALOGY VARIATIONS
• AFF (5): one-line options tied to chosen angles
• NEG (5): one-line options tied to chosen angles
"#;

const EXAMPLE_GENERAL: &str = r#"Example Bill (summary): Prohibit public-school "Gifted & Talented" (GT) programs; redirect funds to universal enrichment.

AFFIRMATION
• Contentions:
  1) Equity of Access — selective screening replicates bias → closes opportunity gaps.
  2) Peer Effects For All — enrichment raises floor + ceiling via cooperative learning → system-wide gains.
  3) Admin Overhead → Instruction — redirect GT admin to teachers → more instructional minutes.
• Rhetoric: Hook: "Gifted isn't a classroom—it's a chance." | Analogy: "Water the whole garden." | Crystallization: "Equity that scales beats excellence that isolates."
• Evidence Prompts: mis-ID rates by income/race; enrichment RCTs; GT admin costs; cooperative learning meta-analyses.
• Weighing: scope • sustainability • probability

NEGATION
• Contentions:
  1) Tailored Acceleration — high-ability pacing needs → avoid disengagement/flight.
  2) Spillover from Advanced Tracks — prestige/grants help everyone → don't torch the halo.
  3) Implementation Risk — universal enrichment unfunded → mediocrity for all.
• Rhetoric: Hook: "Excellence isn't elitism; it's oxygen." | Analogy: "Sprinters shouldn't walk." | Crystallization: "Fix the filter, don't smash the beaker."
• Evidence Prompts: attrition/engagement data; magnet/advanced program outcomes; PD costs.
• Weighing: probability of rollout failure • distributional harms • retention."#;

const EXAMPLE_BIOMED: &str = r#"Example Bill (summary): Appropriate $2B annually for limb-regeneration stem-cell research under NIH/DoD, funding basic science through trials.

AFFIRMATION
• Contentions:
  1) Whole-Function Recovery — integrates nerve + muscle + vasculature → dexterity beyond prosthetic limits → lifetime QALY gains.
  2) VA-Centered Care Loop — DoD/VA data-sharing speeds recruitment + standardizes rehab protocols → earlier coverage decisions → earlier access for veterans.
  3) Platform Spillovers — vascularization/scaffold breakthroughs transfer to wound care & diabetic ulcers → broader public health returns.
• Rhetoric: Hook: "A limb is not a tool—it’s a life returned." | Analogy: "We’re not patching a tire; we’re rebuilding the wheel." | Crystallization: "Restore function, restore futures."

NEGATION
• Contentions:
  1) GMP Bottleneck — autologous cell therapy needs Class B/A cleanrooms & high-wage techs → capacity, not discovery, is the choke point → trials stall and waits swell.
  2) Consent Drift & Re-ID — iPSC lines + omics enable reidentification → withdrawals fracture datasets → pivotal phases delay.
  3) Coverage Cliff — without CMS/VA codes and DRG fit, approval ≠ access → headlines without care.
• Rhetoric: Hook: "A cure you can’t manufacture is a promise you can’t keep." | Analogy: "Tracks with no steel." | Crystallization: "If access is zero, impact is zero.""#;

/// General policy failure modes for the creative brainstorm.
pub const NOVELTY_TAXONOMY: &str = r#"When asked for creative arguments, generate candidates across these buckets:
- Implementation failure modes (procurement, right-of-way, cost overrun mechanics)
- Second-order effects (lock-in, path dependence, rebound, crowd-out of better alternatives)
- Supply chain ethics & geopolitics (materials, labor, ESG, sanctions exposure)
- Systems risk & security (cyber-physical, fail-safes, critical dependencies)
- Legal/federalism/administrative law (preemption, APA, state matches, litigation risk)
- Equity & spatial distribution (who benefits vs who pays; rural/urban; corridors vs periphery)
- Environmental side-effects (construction-phase emissions, biodiversity, water, mining)
- Labor & capacity constraints (specialized workforce bottlenecks, training lag)
- Data/privacy/AI governance (telemetry, tracking, vendor lock)
- International commitments (treaties, standards misalignment)"#;

/// Biomedical and regenerative-medicine angles for the creative brainstorm.
pub const BIOMED_TAXONOMY: &str = r#"For biomedical/regenerative topics also explore:
- GMP/CMC manufacturing scale-up (cleanrooms, sterility assurance, batch failure rates)
- Autologous vs allogeneic pipelines (throughput, QC burden, cost per patient)
- Reimbursement pathways (CMS/VA coverage, CPT/HCPCS codes, DRG fit/misfit)
- IP thickets & freedom-to-operate (gene-editing, iPSC methods, growth factors)
- Biobank consent drift & reidentification risk (HIPAA/GDPR, broad consent mismatch)
- Xeno-free reagent supply chains & ethical sourcing (growth media, scaffolds)
- Tumorigenicity/off-target risks & FDA clinical holds (risk perception, trust shocks)
- Surgical workforce/training bottlenecks for implantation & rehab
- Data governance for cell provenance & chain-of-custody (auditability)
- Dual-use & militarization (performance enhancement vs therapy optics)"#;

fn creative_mode(novelty: Novelty) -> String {
    format!(
        r#"CREATIVE MODE: {level}
Follow this pipeline silently (do NOT print steps):
1) List 8–12 expected/common arguments for both sides as one-liners. Do not use these in the final.
2) Using the general taxonomy and the biomedical one below, brainstorm 12–18 unconventional candidates across distinct buckets. Avoid clichés.
3) Score each: novelty (0–10) and plausibility (0–10). Keep only items with novelty ≥ 7 and plausibility ≥ 7. Sort by total.
4) From the top 3 per side, write full contentions (Claim → Mechanism → Impact → "what this means"). Distinct mechanisms only.
5) Rhetoric: Hook, sharp Analogy, Crystallization line per side matching the chosen angles.
6) ANALOGY VARIATIONS: 5 extra one-liners for AFF and 5 for NEG tied to the chosen angles.
7) Hide the brainstorming and scores. Return only the final package.

General Taxonomy:
{general}

Biomedical Taxonomy:
{biomed}"#,
        level = novelty.as_str().to_uppercase(),
        general = NOVELTY_TAXONOMY,
        biomed = BIOMED_TAXONOMY,
    )
}

/// Build the argument-package conversation.
///
/// Shape: coach system prompt, the two worked examples as user turns, then
/// the request itself.
pub fn build_argument_prompt(
    bill: &str,
    minutes: u32,
    style: &str,
    return_qx: bool,
    novelty: Novelty,
    custom_instructions: Option<&str>,
) -> Vec<Message> {
    let mut user = format!(
        "Bill:\n{bill}\n\n\
         Please produce BOTH sides in the schema, using {minutes}:00 speech density. \
         Style preset: {style}. Return cross-ex questions: {qx}.\n\
         Always include ANALOGY VARIATIONS (5 for AFF, 5 for NEG).\n\
         Replace any banned phrases with fresher wording: {banlist}.\n",
        qx = if return_qx { "True" } else { "False" },
        banlist = banlist_text(),
    );

    if novelty.is_elevated() {
        user.push_str("\n\n");
        user.push_str(&creative_mode(novelty));
        user.push('\n');
    }

    if let Some(custom) = custom_directive(custom_instructions) {
        user.push_str("\nADDITIONAL INSTRUCTIONS:\n");
        user.push_str(custom);
    }

    vec![
        Message::system(SYSTEM_COACH),
        Message::user(EXAMPLE_GENERAL),
        Message::user(EXAMPLE_BIOMED),
        Message::user(user.trim()),
    ]
}
