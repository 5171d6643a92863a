//! Compiled-in lemma table.
//!
//! Covers the inflected and irregular forms of every word the rule catalog
//! anchors on. Forms not listed here lemmatize to themselves, so a catalog
//! value written in base form still matches its uninflected use.

/// `(surface form, lemma)` pairs. Surface forms are lowercase.
pub const BUILTIN_LEXICON: &[(&str, &str)] = &[
    // bleeding / blood
    ("bleeding", "bleed"),
    ("bleeds", "bleed"),
    ("bled", "bleed"),
    ("hemorrhaging", "hemorrhage"),
    ("hemorrhaged", "hemorrhage"),
    ("haemorrhage", "hemorrhage"),
    ("soaking", "soak"),
    ("soaked", "soak"),
    ("soaks", "soak"),
    ("filling", "fill"),
    ("filled", "fill"),
    ("fills", "fill"),
    ("gushing", "gush"),
    ("gushed", "gush"),
    ("gushes", "gush"),
    ("pouring", "pour"),
    ("poured", "pour"),
    ("pours", "pour"),
    ("passing", "pass"),
    ("passed", "pass"),
    ("passes", "pass"),
    ("clots", "clot"),
    ("clotting", "clot"),
    ("clotted", "clot"),
    ("vomiting", "vomit"),
    ("vomited", "vomit"),
    ("vomits", "vomit"),
    ("throwing", "throw"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("throws", "throw"),
    ("spitting", "spit"),
    ("spat", "spit"),
    ("coughing", "cough"),
    ("coughed", "cough"),
    ("puking", "puke"),
    ("puked", "puke"),
    ("stopped", "stop"),
    ("stopping", "stop"),
    ("stops", "stop"),
    // breathing / chest
    ("breathing", "breathe"),
    ("breathed", "breathe"),
    ("breathes", "breathe"),
    ("struggling", "struggle"),
    ("struggled", "struggle"),
    ("gasping", "gasp"),
    ("gasped", "gasp"),
    ("gasps", "gasp"),
    ("wheezing", "wheeze"),
    ("wheezed", "wheeze"),
    ("wheezy", "wheeze"),
    ("hurting", "hurt"),
    ("hurts", "hurt"),
    ("aching", "ache"),
    ("aches", "ache"),
    ("ached", "ache"),
    ("pains", "pain"),
    ("squeezing", "squeeze"),
    ("squeezed", "squeeze"),
    ("tightening", "tighten"),
    ("tightened", "tighten"),
    ("tightens", "tighten"),
    ("racing", "race"),
    ("raced", "race"),
    ("races", "race"),
    ("pounding", "pound"),
    ("pounded", "pound"),
    ("pounds", "pound"),
    ("beating", "beat"),
    ("beats", "beat"),
    ("throbbing", "throb"),
    ("throbbed", "throb"),
    ("throbs", "throb"),
    ("fluttering", "flutter"),
    ("fluttered", "flutter"),
    ("flutters", "flutter"),
    ("skipping", "skip"),
    ("skipped", "skip"),
    ("palpitations", "palpitation"),
    // neurological
    ("slurred", "slur"),
    ("slurring", "slur"),
    ("slurs", "slur"),
    ("garbled", "garble"),
    ("drooping", "droop"),
    ("drooped", "droop"),
    ("droops", "droop"),
    ("droopy", "droop"),
    ("seizures", "seizure"),
    ("seizing", "seize"),
    ("seized", "seize"),
    ("convulsing", "convulse"),
    ("convulsed", "convulse"),
    ("convulsions", "convulsion"),
    ("tremors", "tremor"),
    ("trembling", "tremble"),
    ("shaking", "shake"),
    ("shook", "shake"),
    ("shakes", "shake"),
    ("fainted", "faint"),
    ("fainting", "faint"),
    ("faints", "faint"),
    ("blacked", "black"),
    ("blacking", "black"),
    ("spinning", "spin"),
    ("spun", "spin"),
    ("spins", "spin"),
    ("blurred", "blur"),
    ("blurring", "blur"),
    ("seeing", "see"),
    ("saw", "see"),
    ("seen", "see"),
    ("sees", "see"),
    ("spots", "spot"),
    ("spotting", "spot"),
    ("stars", "star"),
    ("flashes", "flash"),
    ("flashing", "flash"),
    ("flashed", "flash"),
    ("lost", "lose"),
    ("losing", "lose"),
    ("headaches", "headache"),
    ("migraines", "migraine"),
    ("killing", "kill"),
    ("kills", "kill"),
    ("exploding", "explode"),
    ("explodes", "explode"),
    ("arms", "arm"),
    ("going", "go"),
    ("went", "go"),
    ("goes", "go"),
    // wounds / infection
    ("draining", "drain"),
    ("drained", "drain"),
    ("drains", "drain"),
    ("oozing", "ooze"),
    ("oozed", "ooze"),
    ("oozes", "ooze"),
    ("leaking", "leak"),
    ("leaked", "leak"),
    ("leaks", "leak"),
    ("opened", "open"),
    ("opening", "open"),
    ("opens", "open"),
    ("reopened", "reopen"),
    ("splitting", "split"),
    ("splits", "split"),
    ("separated", "separate"),
    ("separating", "separate"),
    ("smelled", "smell"),
    ("smelling", "smell"),
    ("smells", "smell"),
    ("smelt", "smell"),
    ("smelly", "smell"),
    ("stinks", "stink"),
    ("stinking", "stink"),
    ("stank", "stink"),
    ("stinky", "stink"),
    ("odour", "odor"),
    ("odors", "odor"),
    ("odours", "odor"),
    ("infected", "infect"),
    ("infections", "infection"),
    ("incisions", "incision"),
    ("wounds", "wound"),
    ("stitches", "stitch"),
    ("staples", "staple"),
    ("sutures", "suture"),
    ("scars", "scar"),
    ("fevers", "fever"),
    // swelling / location
    ("swollen", "swell"),
    ("swelling", "swell"),
    ("swelled", "swell"),
    ("swells", "swell"),
    ("legs", "leg"),
    ("calves", "calf"),
    ("ribs", "rib"),
    ("hands", "hand"),
    ("fingers", "finger"),
    ("ankles", "ankle"),
    ("faces", "face"),
    // newborn
    ("babies", "baby"),
    ("newborns", "newborn"),
    ("lips", "lip"),
    ("waking", "wake"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("wakes", "wake"),
    ("feeding", "feed"),
    ("fed", "feed"),
    ("feeds", "feed"),
    ("eating", "eat"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("eats", "eat"),
    ("latching", "latch"),
    ("refusing", "refuse"),
    ("refuses", "refuse"),
    ("refused", "refuse"),
    ("grunting", "grunt"),
    ("grunts", "grunt"),
    ("jaundiced", "jaundice"),
    // logistics / clinical
    ("pads", "pad"),
    ("diapers", "diaper"),
    ("wipes", "wipe"),
    ("blankets", "blanket"),
    ("linens", "linen"),
    ("sheets", "sheet"),
    ("pillows", "pillow"),
    ("towels", "towel"),
    ("snacks", "snack"),
    ("bottles", "bottle"),
    ("cups", "cup"),
    ("straws", "straw"),
    ("socks", "sock"),
    ("gowns", "gown"),
    ("pacifiers", "pacifier"),
    ("walking", "walk"),
    ("walked", "walk"),
    ("walks", "walk"),
    ("standing", "stand"),
    ("showering", "shower"),
    ("showered", "shower"),
    ("showers", "shower"),
    ("helping", "help"),
    ("helped", "help"),
    ("helps", "help"),
    ("cramping", "cramp"),
    ("cramps", "cramp"),
    ("cramped", "cramp"),
    ("itching", "itch"),
    ("itches", "itch"),
    ("burning", "burn"),
    ("burns", "burn"),
    ("bloated", "bloat"),
    ("bloating", "bloat"),
    ("constipated", "constipate"),
    ("medications", "medication"),
    ("medicines", "medicine"),
    ("meds", "med"),
    ("pills", "pill"),
    ("doses", "dose"),
    ("painkillers", "painkiller"),
    ("vitamins", "vitamin"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn forms_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (form, lemma) in BUILTIN_LEXICON {
            assert!(seen.insert(*form), "duplicate form {form}");
            assert_eq!(*form, form.to_lowercase());
            assert_eq!(*lemma, lemma.to_lowercase());
            assert!(!form.is_empty() && !lemma.is_empty());
        }
    }
}
