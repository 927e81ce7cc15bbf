//! Numeric, temporal and monetary dictionaries (spec §4.2, §4.7), carried
//! with their literal Icelandic values recovered from
//! `original_source/tokenizer.py` (SPEC_FULL §B.2/§B.4).

use crate::token::UnitClass;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberDict {
    pub months: FxHashMap<String, u8>,
    pub days_of_month: FxHashMap<String, u8>,
    pub clock_numbers: FxHashMap<String, (u8, u8, u8)>,
    pub clock_half: FxHashSet<String>,
    pub multipliers: FxHashMap<String, f64>,
    pub fractions: FxHashMap<String, f64>,
    pub percentages: FxHashSet<String>,
    pub nationalities: FxHashMap<String, String>,
    pub currencies: FxHashMap<String, String>,
    /// (nationality-code, base-currency-ISO, resolved-ISO-code) triples.
    /// Not a map keyed by the pair, since a `(String, String)` tuple key
    /// cannot round-trip through `serde_json`'s object-keyed maps.
    pub iso_currencies: Vec<(String, String, String)>,
    pub amount_abbrev: FxHashMap<String, f64>,
    pub si_units: FxHashMap<String, UnitClass>,
    pub allowed_multiples: FxHashSet<String>,
    pub adjective_prefixes: FxHashSet<String>,
}

impl NumberDict {
    pub fn month_number(&self, word: &str) -> Option<u8> {
        self.months.get(word).copied()
    }

    pub fn resolve_iso_currency(&self, nationality: &str, base: &str) -> Option<&str> {
        self.iso_currencies
            .iter()
            .find(|(n, b, _)| n == nationality && b == base)
            .map(|(_, _, iso)| iso.as_str())
    }

    pub fn default_dict() -> Self {
        let mut d = NumberDict::default();

        for (name, n) in [
            ("janúar", 1),
            ("febrúar", 2),
            ("mars", 3),
            ("apríl", 4),
            ("maí", 5),
            ("júní", 6),
            ("júlí", 7),
            ("ágúst", 8),
            ("september", 9),
            ("október", 10),
            ("nóvember", 11),
            ("desember", 12),
        ] {
            d.months.insert(name.to_string(), n);
        }

        for (name, n) in [
            ("fyrsti", 1), ("fyrsta", 1),
            ("annar", 2), ("annan", 2),
            ("þriðji", 3), ("þriðja", 3),
            ("fjórði", 4), ("fjórða", 4),
            ("fimmti", 5), ("fimmta", 5),
            ("sjötti", 6), ("sjötta", 6),
            ("sjöundi", 7), ("sjöunda", 7),
            ("áttundi", 8), ("áttunda", 8),
            ("níundi", 9), ("níunda", 9),
            ("tíundi", 10), ("tíunda", 10),
            ("ellefti", 11), ("ellefta", 11),
            ("tólfti", 12), ("tólfta", 12),
            ("þrítugasti", 30), ("þrítugasta", 30),
        ] {
            d.days_of_month.insert(name.to_string(), n);
        }

        for (name, h, m, s) in [
            ("eitt", 1, 0, 0), ("tvö", 2, 0, 0), ("þrjú", 3, 0, 0), ("fjögur", 4, 0, 0),
            ("fimm", 5, 0, 0), ("sex", 6, 0, 0), ("sjö", 7, 0, 0), ("átta", 8, 0, 0),
            ("níu", 9, 0, 0), ("tíu", 10, 0, 0), ("ellefu", 11, 0, 0), ("tólf", 12, 0, 0),
            ("hálfeitt", 12, 30, 0), ("hálftvö", 1, 30, 0), ("hálfþrjú", 2, 30, 0),
            ("hálffjögur", 3, 30, 0), ("hálffimm", 4, 30, 0), ("hálfsex", 5, 30, 0),
            ("hálfsjö", 6, 30, 0), ("hálfátta", 7, 30, 0), ("hálfníu", 8, 30, 0),
            ("hálftíu", 9, 30, 0), ("hálfellefu", 10, 30, 0), ("hálftólf", 11, 30, 0),
        ] {
            d.clock_numbers.insert(name.to_string(), (h, m, s));
            if name.starts_with("hálf") {
                d.clock_half.insert(name.to_string());
            }
        }

        for (name, n) in [
            ("einn", 1.0), ("tveir", 2.0), ("þrír", 3.0), ("fjórir", 4.0), ("fimm", 5.0),
            ("sex", 6.0), ("sjö", 7.0), ("átta", 8.0), ("níu", 9.0), ("tíu", 10.0),
            ("ellefu", 11.0), ("tólf", 12.0), ("þrettán", 13.0), ("fjórtán", 14.0),
            ("fimmtán", 15.0), ("sextán", 16.0), ("sautján", 17.0), ("seytján", 17.0),
            ("átján", 18.0), ("nítján", 19.0), ("tuttugu", 20.0), ("þrjátíu", 30.0),
            ("fjörutíu", 40.0), ("fimmtíu", 50.0), ("sextíu", 60.0), ("sjötíu", 70.0),
            ("áttatíu", 80.0), ("níutíu", 90.0), ("hundrað", 100.0), ("þúsund", 1000.0),
            ("þús.", 1000.0), ("milljón", 1e6), ("milla", 1e6), ("milljarður", 1e9),
            ("miljarður", 1e9), ("ma.", 1e9),
        ] {
            d.multipliers.insert(name.to_string(), n);
        }

        for (name, n) in [
            ("þriðji", 1.0 / 3.0), ("fjórði", 1.0 / 4.0), ("fimmti", 1.0 / 5.0),
            ("sjötti", 1.0 / 6.0), ("sjöundi", 1.0 / 7.0), ("áttundi", 1.0 / 8.0),
            ("níundi", 1.0 / 9.0), ("tíundi", 1.0 / 10.0), ("tuttugasti", 1.0 / 20.0),
            ("hundraðasti", 1.0 / 100.0), ("þúsundasti", 1.0 / 1000.0),
            ("milljónasti", 1.0 / 1e6),
        ] {
            d.fractions.insert(name.to_string(), n);
        }

        for word in ["prósent", "prósenta", "hundraðshluti", "prósentustig"] {
            d.percentages.insert(word.to_string());
        }

        for (adj, code) in [
            ("danskur", "dk"), ("enskur", "uk"), ("breskur", "uk"), ("bandarískur", "us"),
            ("kanadískur", "ca"), ("svissneskur", "ch"), ("sænskur", "se"), ("norskur", "no"),
            ("japanskur", "jp"), ("íslenskur", "is"), ("pólskur", "po"), ("kínverskur", "cn"),
            ("ástralskur", "au"), ("rússneskur", "ru"), ("indverskur", "in"), ("indónesískur", "id"),
        ] {
            d.nationalities.insert(adj.to_string(), code.to_string());
        }

        for (word, iso) in [
            ("króna", "ISK"), ("ISK", "ISK"), ("kr.", "ISK"), ("kr", "ISK"), ("pund", "GBP"),
            ("sterlingspund", "GBP"), ("GBP", "GBP"), ("dollari", "USD"), ("dalur", "USD"),
            ("bandaríkjadalur", "USD"), ("USD", "USD"), ("franki", "CHF"), ("rúbla", "RUB"),
            ("RUB", "RUB"), ("rúpía", "INR"), ("INR", "INR"), ("IDR", "IDR"), ("CHF", "CHF"),
            ("jen", "JPY"), ("yen", "JPY"), ("JPY", "JPY"), ("zloty", "PLN"), ("PLN", "PLN"),
            ("júan", "CNY"), ("yuan", "CNY"), ("CNY", "CNY"), ("evra", "EUR"), ("EUR", "EUR"),
        ] {
            d.currencies.insert(word.to_string(), iso.to_string());
        }

        for ((nat, base), iso) in [
            (("dk", "ISK"), "DKK"), (("is", "ISK"), "ISK"), (("no", "ISK"), "NOK"),
            (("se", "ISK"), "SEK"), (("uk", "GBP"), "GBP"), (("us", "USD"), "USD"),
            (("ca", "USD"), "CAD"), (("au", "USD"), "AUD"), (("ch", "CHF"), "CHF"),
            (("jp", "JPY"), "JPY"), (("po", "PLN"), "PLN"), (("ru", "RUB"), "RUB"),
            (("in", "INR"), "INR"), (("id", "INR"), "IDR"), (("cn", "CNY"), "CNY"),
        ] {
            d.iso_currencies.push((nat.to_string(), base.to_string(), iso.to_string()));
        }

        for (abbrev, factor) in [
            ("þ.kr.", 1e3), ("þús.kr.", 1e3), ("m.kr.", 1e6), ("mkr.", 1e6),
            ("millj.kr.", 1e6), ("mljó.kr.", 1e6), ("ma.kr.", 1e9), ("mö.kr.", 1e9),
            ("mlja.kr.", 1e9),
        ] {
            d.amount_abbrev.insert(abbrev.to_string(), factor);
        }

        for (unit, class) in [
            ("m²", UnitClass::Area), ("fm", UnitClass::Area), ("cm²", UnitClass::Area),
            ("cm³", UnitClass::Volume), ("ltr", UnitClass::Volume), ("dl", UnitClass::Volume),
            ("cl", UnitClass::Volume), ("m³", UnitClass::Volume), ("°C", UnitClass::Temperature),
            ("gr", UnitClass::Weight), ("kg", UnitClass::Weight), ("mg", UnitClass::Weight),
            ("μg", UnitClass::Weight), ("km", UnitClass::Length), ("mm", UnitClass::Length),
            ("cm", UnitClass::Length), ("sm", UnitClass::Length),
        ] {
            d.si_units.insert(unit.to_string(), class);
        }

        for word in [
            "af", "að", "bara", "bæði", "eftir", "eigi", "eins", "ekki", "er", "fram", "frá",
            "fyrir", "hjá", "með", "milli", "sem", "til", "um", "undir", "upp", "við",
        ] {
            d.allowed_multiples.insert(word.to_string());
        }

        for prefix in ["hálf", "marg", "semí"] {
            d.adjective_prefixes.insert(prefix.to_string());
        }

        d
    }
}
