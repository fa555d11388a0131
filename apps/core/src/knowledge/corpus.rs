//! Knowledge entries and the built-in platform corpus.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A short platform fact that can be surfaced in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct KnowledgeEntry {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    /// Canonical path or URL of the page the fact comes from.
    #[validate(length(min = 1))]
    pub url: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(min = 1))]
    pub content: String,
}

/// (id, title, url, summary, tags, content)
type EntryRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
);

const BUILTIN_ENTRIES: &[EntryRow] = &[
    (
        "pricing",
        "Kosten und Preise",
        "/preise",
        "Was eine Sitzung bei Selbstzahlung kostet und welche Zahlungswege es gibt.",
        &["kosten", "preise", "kostet", "therapiesitzung", "bezahlung", "selbstzahler"],
        "Eine Therapiesitzung von 50 Minuten kostet bei Selbstzahlung je nach Therapeut:in zwischen \
         90 und 130 Euro. Den genauen Preis siehst du vorab im Profil. Das Erstgespräch ist bei \
         vielen Therapeut:innen vergünstigt. Bezahlt wird nach der Sitzung per Rechnung, \
         Lastschrift oder Kreditkarte. Für die Vermittlung selbst fallen für dich keine \
         zusätzlichen Gebühren an.",
    ),
    (
        "insurance",
        "Kostenübernahme durch die Krankenkasse",
        "/krankenkasse",
        "Wann gesetzliche und private Krankenkassen eine Psychotherapie übernehmen.",
        &["krankenkasse", "kostenübernahme", "versicherung", "erstattung", "kassenleistung"],
        "Gesetzliche Krankenkassen übernehmen eine Psychotherapie bei approbierten \
         Psychotherapeut:innen mit Kassensitz. Nach der psychotherapeutischen Sprechstunde und \
         bis zu vier probatorischen Sitzungen wird ein Antrag gestellt. Private Versicherungen \
         erstatten je nach Tarif ganz oder teilweise. Bei Therapeut:innen ohne Kassensitz ist \
         eine Erstattung im Kostenerstattungsverfahren möglich, wenn nachweislich kein \
         zeitnaher Kassenplatz verfügbar ist.",
    ),
    (
        "matching",
        "So funktioniert das Matching",
        "/so-funktionierts",
        "In drei Schritten zu passenden Therapeut:innen.",
        &["matching", "funktioniert", "ablauf", "therapeutensuche", "vermittlung"],
        "Zuerst beantwortest du einige Fragen zu deinem Anliegen, deinen Wünschen und deiner \
         Verfügbarkeit. Unser Matching schlägt dir daraufhin Therapeut:innen vor, deren \
         Schwerpunkte, Verfahren und freie Termine zu dir passen. Du siehst Profile, Videos und \
         Preise und kannst direkt ein Erstgespräch anfragen. Passt es nicht, kannst du jederzeit \
         neue Vorschläge erhalten.",
    ),
    (
        "assessment",
        "Der Selbsttest",
        "/selbsttest",
        "Ein kostenloser Fragebogen für eine erste Einschätzung deiner Belastung.",
        &["selbsttest", "test", "fragebogen", "einschätzung", "assessment"],
        "Der Selbsttest dauert etwa fünf Minuten und basiert auf wissenschaftlich etablierten \
         Fragebögen zu Stimmung, Angst, Stress und Schlaf. Am Ende erhältst du eine erste \
         Einschätzung deiner Belastung und Empfehlungen, welche Form der Unterstützung sinnvoll \
         sein kann. Der Test ersetzt keine Diagnose, hilft aber beim Matching mit passenden \
         Therapeut:innen.",
    ),
    (
        "first-session",
        "Das Erstgespräch",
        "/erstgespraech",
        "Was dich beim ersten Termin erwartet.",
        &["erstgespräch", "kennenlernen", "probatorik", "sprechstunde", "erster"],
        "Im Erstgespräch lernt ihr euch kennen. Du erzählst, was dich zu uns geführt hat, und \
         deine Therapeut:in erklärt die Arbeitsweise. Gemeinsam klärt ihr, ob die Chemie stimmt \
         und welche Ziele ihr verfolgen wollt. Du bist zu nichts verpflichtet: Wenn es nicht \
         passt, kannst du eine andere Person aus deinen Vorschlägen wählen.",
    ),
    (
        "online-therapy",
        "Online-Therapie per Video",
        "/online-therapie",
        "Therapie bequem von zu Hause über eine sichere Videoverbindung.",
        &["online", "video", "videotherapie", "digital", "zuhause"],
        "Viele unserer Therapeut:innen bieten Sitzungen per Video an. Du brauchst nur ein \
         Smartphone, Tablet oder einen Computer mit Kamera und eine stabile Internetverbindung. \
         Die Videosprechstunde läuft über einen zertifizierten, Ende-zu-Ende-verschlüsselten \
         Anbieter. Studien zeigen, dass Online-Therapie bei vielen Anliegen ähnlich wirksam ist \
         wie Therapie vor Ort.",
    ),
    (
        "privacy",
        "Datenschutz und Vertraulichkeit",
        "/datenschutz",
        "Wie wir deine Daten schützen.",
        &["datenschutz", "daten", "vertraulich", "schweigepflicht", "verschlüsselung", "anonym"],
        "Alle Angaben werden verschlüsselt gespeichert und nur an die Therapeut:innen \
         weitergegeben, die du selbst auswählst. Therapeut:innen unterliegen der gesetzlichen \
         Schweigepflicht. Gesprächsinhalte dieses Chats werden nicht dauerhaft gespeichert. Du \
         kannst dein Konto und alle Daten jederzeit löschen lassen. Wir verarbeiten Daten \
         ausschließlich auf Servern in der EU und gemäß DSGVO.",
    ),
    (
        "crisis-help",
        "Soforthilfe in Krisen",
        "/soforthilfe",
        "Wo du in akuten Krisen sofort Hilfe bekommst.",
        &["notfall", "krise", "soforthilfe", "telefonseelsorge", "notruf"],
        "Wir sind keine Notfallstelle. In akuten Krisen erreichst du die TelefonSeelsorge rund um \
         die Uhr kostenlos und anonym unter 0800 111 0 111 oder 0800 111 0 222. Bei akuter \
         Gefahr wähle den Notruf 112 oder wende dich an die nächste psychiatrische Klinik. \
         Kinder und Jugendliche erreichen die Nummer gegen Kummer unter 116 111.",
    ),
    (
        "waiting-time",
        "Wartezeiten",
        "/wartezeiten",
        "Wie schnell du einen Termin bekommst.",
        &["wartezeit", "warteliste", "schnell", "verfügbarkeit", "freie"],
        "Unser Matching zeigt dir nur Therapeut:innen mit freien Kapazitäten. Ein Erstgespräch \
         ist meist innerhalb von ein bis zwei Wochen möglich, bei Online-Terminen oft schon in \
         wenigen Tagen. Lange Wartelisten, wie sie bei Kassenplätzen üblich sind, entfallen \
         dadurch in den meisten Fällen.",
    ),
    (
        "qualifications",
        "Qualifikation unserer Therapeut:innen",
        "/therapeuten",
        "Welche Ausbildung und welche Verfahren unsere Therapeut:innen mitbringen.",
        &["qualifikation", "approbation", "ausbildung", "verfahren", "verhaltenstherapie"],
        "Alle Therapeut:innen auf unserer Plattform sind approbierte Psychologische \
         Psychotherapeut:innen, Ärztliche Psychotherapeut:innen oder Heilpraktiker:innen für \
         Psychotherapie. Wir prüfen Approbation und Abschlüsse vor der Freischaltung. Angeboten \
         werden unter anderem Verhaltenstherapie, tiefenpsychologisch fundierte Therapie, \
         systemische Therapie und Psychoanalyse.",
    ),
    (
        "cancellation",
        "Termine absagen und verschieben",
        "/termine",
        "Regeln für Absagen und Terminänderungen.",
        &["absagen", "stornierung", "verschieben", "ausfallgebühr", "terminänderung"],
        "Termine kannst du bis 48 Stunden vorher kostenfrei absagen oder verschieben, direkt in \
         deinem Konto oder per Nachricht an deine Therapeut:in. Bei späteren Absagen können \
         Therapeut:innen eine Ausfallgebühr berechnen, die im Profil angegeben ist.",
    ),
    (
        "for-therapists",
        "Für Therapeut:innen",
        "/fuer-therapeuten",
        "Wie sich Therapeut:innen auf der Plattform registrieren.",
        &["registrieren", "praxis", "profil", "mitmachen", "therapeuten"],
        "Therapeut:innen können sich mit ihrer Approbation oder Heilpraktikererlaubnis \
         registrieren, ein Profil mit Schwerpunkten, Verfahren und Preisen anlegen und ihre \
         freien Kapazitäten pflegen. Neue Klient:innen werden über das Matching vermittelt. Die \
         Praxisverwaltung bleibt vollständig in eurer Hand.",
    ),
    (
        "support",
        "Kontakt zum Support",
        "/kontakt",
        "So erreichst du unser Support-Team.",
        &["kontakt", "support", "email", "telefon", "ansprechpartner"],
        "Unser Support-Team hilft dir bei Fragen zum Matching, zu deinem Konto oder zur \
         Abrechnung. Du erreichst uns per E-Mail an hilfe@example.org oder werktags von 9 bis 17 \
         Uhr telefonisch. In der Regel antworten wir innerhalb eines Werktags. Der Support \
         leistet keine psychologische Beratung und ist keine Notfallstelle.",
    ),
    (
        "topics",
        "Themen und Schwerpunkte",
        "/themen",
        "Bei welchen Anliegen unsere Therapeut:innen unterstützen.",
        &["depression", "angst", "burnout", "stress", "trauma", "beziehung", "schwerpunkte"],
        "Unsere Therapeut:innen begleiten bei Depressionen, Angst- und Panikstörungen, Burnout \
         und chronischem Stress, Traumafolgen, Schlafproblemen, Trauer, Selbstwertthemen, \
         Einsamkeit sowie Beziehungs- und Familienkonflikten. Über das Matching findest du \
         Menschen, die auf dein Thema spezialisiert sind.",
    ),
];

/// The corpus shipped with the crate.
pub fn builtin_entries() -> Vec<KnowledgeEntry> {
    BUILTIN_ENTRIES
        .iter()
        .map(|(id, title, url, summary, tags, content)| KnowledgeEntry {
            id: id.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
        })
        .collect()
}
