//! Static Indian Penal Code reference data.
//!
//! The table is fixed at startup and iterated in declaration order, which is
//! also the tie-break order of the matcher. Keywords are lowercase.

use crate::domain::{StatuteEntry, StatuteTable};

fn entry(
    section: &str,
    title: &str,
    description: &str,
    related_case: Option<&str>,
    keywords: &[&str],
) -> StatuteEntry {
    StatuteEntry {
        section: section.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        related_case: related_case.map(|c| c.to_string()),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Build the IPC reference table used by the analysis feature.
pub fn statute_table() -> StatuteTable {
    StatuteTable::new(vec![
        entry(
            "302",
            "Punishment for murder",
            "Whoever commits murder shall be punished with death or imprisonment for life, and shall also be liable to fine.",
            Some("Bachan Singh v. State of Punjab (1980)"),
            &["murder", "murdered", "kill", "killed", "killing", "homicide"],
        ),
        entry(
            "307",
            "Attempt to murder",
            "Whoever does any act with such intention or knowledge that, if death were caused, the act would amount to murder, shall be punished with imprisonment of up to ten years and fine.",
            Some("State of Maharashtra v. Balram Bama Patil (1983)"),
            &["attempt", "attempted", "attack", "attacked", "stab", "stabbed"],
        ),
        entry(
            "376",
            "Punishment for rape",
            "Whoever commits rape shall be punished with rigorous imprisonment of not less than ten years, which may extend to imprisonment for life, and fine.",
            Some("Mukesh v. State (NCT of Delhi) (2017)"),
            &["rape", "raped", "molestation", "molested"],
        ),
        entry(
            "379",
            "Punishment for theft",
            "Whoever commits theft shall be punished with imprisonment of up to three years, or with fine, or with both.",
            Some("Pyare Lal Bhargava v. State of Rajasthan (1963)"),
            &["theft", "steal", "stole", "stolen", "stealing", "burglary", "pickpocket"],
        ),
        entry(
            "392",
            "Punishment for robbery",
            "Whoever commits robbery shall be punished with rigorous imprisonment of up to ten years, and shall also be liable to fine.",
            Some("Venu v. State of Karnataka (2008)"),
            &["robbery", "robbed", "loot", "looted", "snatching", "snatched"],
        ),
        entry(
            "406",
            "Punishment for criminal breach of trust",
            "Whoever commits criminal breach of trust shall be punished with imprisonment of up to three years, or with fine, or with both.",
            Some("Rashmi Kumar v. Mahesh Kumar Bhada (1997)"),
            &["trust", "breach", "misappropriation", "misappropriated", "entrusted"],
        ),
        entry(
            "420",
            "Cheating and dishonestly inducing delivery of property",
            "Whoever cheats and thereby dishonestly induces the person deceived to deliver any property shall be punished with imprisonment of up to seven years, and shall also be liable to fine.",
            Some("Hridaya Ranjan Prasad Verma v. State of Bihar (2000)"),
            &["cheating", "cheated", "fraud", "scam", "scammed", "deceived", "dishonest"],
        ),
        entry(
            "498A",
            "Husband or relative of husband subjecting a woman to cruelty",
            "Whoever, being the husband or a relative of the husband of a woman, subjects her to cruelty shall be punished with imprisonment of up to three years and fine.",
            Some("Arnesh Kumar v. State of Bihar (2014)"),
            &["cruelty", "harassment", "harassed", "husband", "in-laws", "marriage"],
        ),
        entry(
            "304B",
            "Dowry death",
            "Where the death of a woman is caused within seven years of her marriage and it is shown that she was subjected to cruelty in connection with a demand for dowry, such death is called dowry death, punishable with imprisonment of not less than seven years.",
            Some("Kans Raj v. State of Punjab (2000)"),
            &["dowry", "bride"],
        ),
        entry(
            "323",
            "Punishment for voluntarily causing hurt",
            "Whoever voluntarily causes hurt shall be punished with imprisonment of up to one year, or with fine of up to one thousand rupees, or with both.",
            Some("Mathai v. State of Kerala (2005)"),
            &["hurt", "beaten", "beating", "assault", "assaulted", "injury", "injured"],
        ),
        entry(
            "500",
            "Punishment for defamation",
            "Whoever defames another shall be punished with simple imprisonment of up to two years, or with fine, or with both.",
            Some("Subramanian Swamy v. Union of India (2016)"),
            &["defamation", "defamed", "reputation", "slander", "libel"],
        ),
        entry(
            "120B",
            "Punishment of criminal conspiracy",
            "Whoever is a party to a criminal conspiracy to commit a serious offence shall be punished in the same manner as if he had abetted the offence.",
            Some("Kehar Singh v. State (Delhi Administration) (1988)"),
            &["conspiracy", "conspired", "plot", "plotted"],
        ),
    ])
}
