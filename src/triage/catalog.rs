//! Built-in rule catalog.
//!
//! Emergent groups favor recall over precision. Two-concept phrasings
//! ("chest ... pain") are written in both orders with [`near`].
//!
//! Catalog values are lemmas unless marked [`word`], so they must be base
//! forms known to the lexicon (`bleed`, not `bleeding`).

use crate::triage::pattern::{Category, PatternGroup, PatternStep, PatternTemplate, TokenField};

/// Version tag of the compiled-in catalog.
pub const BUILTIN_CATALOG_VERSION: &str = "2025.2";

/// Negations and refusals, as lemmas.
const NEGATION: &[&str] = &[
    "won't", "wont", "not", "isn't", "isnt", "doesn't", "doesnt", "can't", "cant", "hasn't",
    "hasnt", "haven't", "never", "refuse",
];

/// Subjects that tie a newborn sign to the baby rather than the patient.
const INFANT: &[&str] = &["baby", "newborn", "infant", "son", "daughter"];

fn lemma(values: &[&str]) -> PatternStep {
    PatternStep::exact(TokenField::Lemma, values)
}

fn word(values: &[&str]) -> PatternStep {
    PatternStep::exact(TokenField::Surface, values)
}

fn gap() -> PatternStep {
    PatternStep::Gap
}

fn seq(steps: Vec<PatternStep>) -> PatternTemplate {
    PatternTemplate::new(steps)
}

/// Any single lemma from `values`.
fn any(values: &[&str]) -> PatternTemplate {
    seq(vec![lemma(values)])
}

/// `a ... b` and `b ... a`.
fn near(a: &[&str], b: &[&str]) -> [PatternTemplate; 2] {
    [
        seq(vec![lemma(a), gap(), lemma(b)]),
        seq(vec![lemma(b), gap(), lemma(a)]),
    ]
}

fn chest_and_heart() -> PatternGroup {
    PatternGroup::new("EMERGENT_CARDIAC", Category::Emergent)
        .with(near(
            &["chest"],
            &[
                "pain", "hurt", "tight", "tightness", "pressure", "ache", "heavy", "heaviness",
                "squeeze", "crush", "crushing", "tighten",
            ],
        ))
        .with(near(
            &["heart"],
            &["race", "pound", "flutter", "skip", "palpitation", "beat", "fast"],
        ))
        .with([any(&["palpitation"])])
}

fn breathing() -> PatternGroup {
    let unable = [NEGATION, &["cannot", "unable"][..]].concat();
    PatternGroup::new("EMERGENT_BREATHING", Category::Emergent)
        .with([
            seq(vec![lemma(&["short", "shortness", "out"]), lemma(&["of"]), lemma(&["breath"])]),
            any(&["gasp", "wheeze", "breathless"]),
            seq(vec![lemma(&unable), gap(), lemma(&["breathe", "breath"])]),
            seq(vec![lemma(&["enough"]), lemma(&["air"])]),
        ])
        .with(near(
            &["trouble", "hard", "difficult", "difficulty", "struggle", "labored"],
            &["breathe", "breath"],
        ))
}

fn hemorrhage() -> PatternGroup {
    PatternGroup::new("EMERGENT_HEMORRHAGE", Category::Emergent)
        .with(near(
            &["heavy", "heavily", "soak", "gush", "pour", "excessive", "tons"],
            &["bleed", "blood"],
        ))
        .with([
            seq(vec![lemma(&["lot", "lots"]), lemma(&["of"]), lemma(&["blood"])]),
            seq(vec![lemma(&["so", "too"]), lemma(&["much"]), lemma(&["blood", "bleed"])]),
            seq(vec![lemma(&["bleed"]), lemma(&["a"]), lemma(&["lot"])]),
            seq(vec![lemma(&["bleed"]), lemma(&["so", "too"]), lemma(&["much"])]),
            seq(vec![lemma(&["bleed"]), gap(), lemma(&["through"])]),
            seq(vec![lemma(&["pass"]), gap(), lemma(&["clot"])]),
            seq(vec![lemma(&["bleed"]), gap(), lemma(NEGATION), gap(), lemma(&["stop"])]),
            seq(vec![lemma(NEGATION), lemma(&["stop"]), gap(), lemma(&["bleed"])]),
            any(&["hemorrhage"]),
        ])
        .with(near(&["soak", "fill"], &["pad"]))
        .with(near(
            &["large", "big", "huge", "golf", "lemon", "egg", "fist", "plum", "giant"],
            &["clot"],
        ))
        .with(near(&["vomit", "throw", "spit", "cough", "puke"], &["blood"]))
}

fn neurological() -> PatternGroup {
    PatternGroup::new("EMERGENT_NEURO", Category::Emergent)
        .with([
            any(&["slur", "garble", "droop"]),
            any(&["seizure", "seize", "convulse", "convulsion", "tremor"]),
            any(&["faint", "unconscious"]),
            seq(vec![lemma(&["pass", "black"]), word(&["out"])]),
            any(&["dizzy", "dizziness", "lightheaded", "vertigo", "woozy"]),
            seq(vec![word(&["light"]), word(&["headed"])]),
            any(&["blurry"]),
            seq(vec![
                lemma(&["headache", "migraine"]),
                gap(),
                lemma(NEGATION),
                gap(),
                lemma(&["go", "stop", "help", "away", "better"]),
            ]),
        ])
        .with(near(&["shake", "tremble"], &["uncontrollably", "uncontrollable"]))
        .with([seq(vec![
            lemma(NEGATION),
            lemma(&["stop"]),
            gap(),
            lemma(&["shake", "tremble"]),
        ])])
        .with(near(&["room"], &["spin"]))
        .with(near(
            &["vision", "eyesight"],
            &["blur", "blurry", "double", "dark", "spot", "lose", "loss", "black", "fuzzy"],
        ))
        .with(near(&["see"], &["spot", "star", "double", "flash"]))
        .with(near(
            &[
                "worst", "severe", "terrible", "unbearable", "excruciating", "pound", "split",
                "intense", "horrible",
            ],
            &["headache", "migraine"],
        ))
        .with(near(&["head"], &["pound", "throb", "kill", "explode"]))
        .with(near(&["numb", "numbness"], &["arm", "face", "side", "hand", "leg"]))
}

fn infection() -> PatternGroup {
    PatternGroup::new("EMERGENT_INFECTION", Category::Emergent)
        .with(near(
            &[
                "incision", "wound", "stitch", "staple", "scar", "cut", "episiotomy", "suture",
            ],
            &[
                "drain", "pus", "ooze", "leak", "open", "reopen", "split", "separate", "red",
                "redness", "smell", "stink", "odor", "green", "infect", "infection",
            ],
        ))
        .with([
            any(&["pus", "purulent", "foul", "fever", "feverish"]),
            seq(vec![
                lemma(&["bad", "awful", "fishy", "rotten", "strong"]),
                lemma(&["smell", "odor"]),
            ]),
        ])
        .with(near(
            &["discharge", "lochia", "drainage"],
            &["smell", "stink", "odor"],
        ))
}

fn clot_and_preeclampsia() -> PatternGroup {
    const PAIN: &[&str] = &["pain", "hurt", "ache", "sharp", "tender"];
    PatternGroup::new("EMERGENT_DVT_PREECLAMPSIA", Category::Emergent)
        .with(near(
            &["calf"],
            &[
                "swell", "hot", "warm", "red", "pain", "hurt", "tender", "ache", "cramp", "hard",
            ],
        ))
        .with(near(&["leg"], &["swell", "hot", "warm", "red", "redness"]))
        .with(near(&["rib"], PAIN))
        .with([
            seq(vec![lemma(&["upper"]), lemma(&["right"]), gap(), lemma(PAIN)]),
            seq(vec![lemma(&["right"]), lemma(&["upper"]), gap(), lemma(PAIN)]),
            seq(vec![lemma(PAIN), gap(), lemma(&["upper"]), lemma(&["right"])]),
            seq(vec![lemma(PAIN), gap(), lemma(&["right"]), lemma(&["upper"])]),
        ])
        .with(near(&["face", "hand", "finger"], &["swell", "puffy"]))
}

fn newborn() -> PatternGroup {
    PatternGroup::new("EMERGENT_NEWBORN", Category::Emergent)
        .with(near(
            INFANT,
            &[
                "blue", "gray", "grey", "pale", "purple", "yellow", "jaundice", "floppy", "limp",
                "lethargic", "unresponsive", "listless", "mottled", "grunt",
            ],
        ))
        .with(near(&["lip", "skin"], &["blue", "purple", "gray", "grey"]))
        .with([
            seq(vec![
                lemma(&["hard", "difficult", "trouble", "difficulty", "impossible"]),
                gap(),
                lemma(&["wake"]),
            ]),
            seq(vec![lemma(INFANT), gap(), lemma(NEGATION), gap(), lemma(&["wake"])]),
            seq(vec![lemma(NEGATION), lemma(&["wake"]), gap(), lemma(INFANT)]),
            seq(vec![
                lemma(&["baby", "newborn", "infant"]),
                gap(),
                lemma(NEGATION),
                gap(),
                lemma(&["eat", "feed", "latch"]),
            ]),
        ])
}

fn supplies() -> PatternGroup {
    PatternGroup::new("LOGISTICS_SUPPLIES", Category::Logistics).with([any(&[
        "water", "ice", "blanket", "linen", "sheet", "pillow", "towel", "diaper", "wipe", "pad",
        "underwear", "formula", "bottle", "snack", "food", "tray", "juice", "coffee", "tea",
        "charger", "remote", "gown", "sock", "menu", "straw", "cup", "pacifier", "swaddle",
    ])])
}

fn assistance() -> PatternGroup {
    PatternGroup::new("LOGISTICS_ASSIST", Category::Logistics).with([
        any(&["bathroom", "restroom", "toilet", "shower", "commode", "wheelchair"]),
        seq(vec![
            lemma(&["help", "assist"]),
            gap(),
            lemma(&["walk", "stand", "bed", "chair"]),
        ]),
    ])
}

fn symptoms() -> PatternGroup {
    PatternGroup::new("CLINICAL_SYMPTOM", Category::Clinical).with([
        any(&[
            "pain", "painful", "hurt", "sore", "soreness", "cramp", "ache", "achy", "nausea",
            "nauseous", "vomit", "constipate", "constipation", "gas", "bloat", "itch", "itchy",
            "headache", "swell", "bleed", "blood", "spot", "chills", "discomfort",
            "uncomfortable", "burn",
        ]),
        seq(vec![lemma(&["throw"]), word(&["up"])]),
    ])
}

fn medications() -> PatternGroup {
    PatternGroup::new("CLINICAL_MEDICATION", Category::Clinical).with([any(&[
        "medication", "medicine", "med", "pill", "tylenol", "acetaminophen", "ibuprofen",
        "motrin", "advil", "aleve", "naproxen", "oxycodone", "percocet", "norco", "colace",
        "softener", "laxative", "dose", "prescription", "painkiller", "lanolin", "dermoplast",
        "vitamin",
    ])])
}

fn wound_care() -> PatternGroup {
    PatternGroup::new("CLINICAL_WOUND", Category::Clinical).with([any(&[
        "incision", "stitch", "staple", "episiotomy", "perineum", "tear", "section", "suture",
        "dressing", "bandage", "catheter", "iv",
    ])])
}

/// All built-in groups, emergent first.
pub fn builtin_groups() -> Vec<PatternGroup> {
    vec![
        chest_and_heart(),
        breathing(),
        hemorrhage(),
        neurological(),
        infection(),
        clot_and_preeclampsia(),
        newborn(),
        supplies(),
        assistance(),
        symptoms(),
        medications(),
        wound_care(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use std::sync::Arc;

    use super::*;
    use crate::triage::lexicon::BUILTIN_LEXICON;
    use crate::triage::matcher::SequenceMatcher;
    use crate::triage::normalize::normalize;
    use crate::triage::registry::PatternRegistry;
    use crate::triage::tokens::{LexiconTokenizer, Tokenizer};

    /// Group names the built-in catalog fires for `text`, skipping the
    /// override and numeric checks.
    fn fired(text: &str) -> Vec<String> {
        let matcher = SequenceMatcher::new(Arc::new(PatternRegistry::builtin()));
        let tokens = LexiconTokenizer::builtin().tokenize(&normalize(text));
        matcher.fired(&tokens).iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn group_names_are_unique() {
        let groups = builtin_groups();
        let names: HashSet<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names.len(), groups.len());
    }

    #[test]
    fn emergent_groups_come_first() {
        let groups = builtin_groups();
        let first_non_emergent = groups
            .iter()
            .position(|g| g.category != Category::Emergent)
            .unwrap();
        assert!(groups[first_non_emergent..]
            .iter()
            .all(|g| g.category != Category::Emergent));
    }

    #[test]
    fn negated_breathing_fires_on_tokens() {
        for text in [
            "I can't  breathe",
            "help\nI can't\nbreathe",
            "I can't breath",
            "unable to breathe",
            "I cannot really breathe",
            "I cant get enough air",
        ] {
            assert_eq!(fired(text), vec!["EMERGENT_BREATHING"], "{text}");
        }
    }

    #[test]
    fn red_flag_wordings() {
        let cases = [
            ("My heart is beating really fast", "EMERGENT_CARDIAC"),
            ("My chest is tightening", "EMERGENT_CARDIAC"),
            ("I'm seeing flashing lights", "EMERGENT_NEURO"),
            ("My head is pounding", "EMERGENT_NEURO"),
            ("my head is killing me", "EMERGENT_NEURO"),
            ("I can't stop shaking", "EMERGENT_NEURO"),
        ];
        for (text, group) in cases {
            assert_eq!(fired(text), vec![group], "{text}");
        }
    }

    #[test]
    fn wake_refusal_needs_an_infant_subject() {
        assert!(fired("Please do not wake me up for vitals").is_empty());
        assert_eq!(fired("I can't wake my son up"), vec!["EMERGENT_NEWBORN"]);
        assert_eq!(fired("my daughter won't wake"), vec!["EMERGENT_NEWBORN"]);
    }

    #[test]
    fn lemma_values_are_base_forms() {
        // A lemma step holding an inflected form could never match once the
        // lexicon reduces that form.
        let inflected: HashSet<&str> = BUILTIN_LEXICON
            .iter()
            .filter(|(form, lemma)| form != lemma)
            .map(|(form, _)| *form)
            .collect();
        for group in builtin_groups() {
            for template in &group.templates {
                for step in template.steps() {
                    if let PatternStep::Exact {
                        field: TokenField::Lemma,
                        values,
                    } = step
                    {
                        for value in values {
                            assert!(
                                !inflected.contains(value.as_str()),
                                "{}: {value} is an inflected form",
                                group.name
                            );
                        }
                    }
                }
            }
        }
    }
}
