//! Canned response templates and phrase pools.
//!
//! Templates are looked up by category. When a category is registered more
//! than once, the first registration wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::category::Category;
use crate::models::SuggestedAction;

/// Emergency guidance appended to every crisis response.
pub const CRISIS_RESOURCES: &str = "Bitte hol dir jetzt sofort Hilfe: Die TelefonSeelsorge ist rund um \
     die Uhr kostenlos und anonym erreichbar unter 0800 111 0 111 oder 0800 111 0 222 sowie im Chat \
     auf telefonseelsorge.de. Wenn du in akuter Gefahr bist, wähle bitte den Notruf 112 oder geh in \
     die nächste psychiatrische Notaufnahme. Du musst da nicht allein durch.";

/// Openers for the fallback reply.
pub const ACKNOWLEDGMENTS: &[&str] = &[
    "Danke, dass du das mit mir teilst.",
    "Ich höre dir zu.",
    "Das klingt, als würde dich gerade einiges beschäftigen.",
    "Schön, dass du dich meldest.",
];

/// Second half of the fallback reply.
pub const ELABORATE_PROMPTS: &[&str] = &[
    "Magst du mir ein bisschen mehr darüber erzählen?",
    "Wie geht es dir damit im Moment?",
    "Was beschäftigt dich dabei am meisten?",
    "Seit wann fühlst du dich so?",
];

/// Appended once a session has collected enough distinct concerns.
pub const ASSESSMENT_INTROS: &[&str] = &[
    "Du hast mir jetzt von mehreren Dingen erzählt, die dich belasten. Unser kurzer Selbsttest kann \
     helfen, das besser einzuordnen und passende Therapeut:innen für dich zu finden.",
    "Vielleicht hilft dir unser kostenloser Selbsttest weiter: In wenigen Minuten bekommst du eine \
     erste Einschätzung und Vorschläge für passende Therapeut:innen.",
    "Wenn du magst, kannst du jetzt unseren Selbsttest machen. Er dauert nur ein paar Minuten und \
     zeigt dir, welche Unterstützung zu dir passen könnte.",
];

/// Response template for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTemplate {
    pub category: Category,
    /// Interchangeable primary responses
    pub responses: Vec<String>,
    pub follow_up: Option<String>,
    pub suggested_action: Option<SuggestedAction>,
}

/// (category, variants, follow-up, action)
type TemplateRow = (
    Category,
    &'static [&'static str],
    Option<&'static str>,
    Option<SuggestedAction>,
);

const DEFAULT_TEMPLATES: &[TemplateRow] = &[
    (
        Category::Crisis,
        &[
            "Es tut mir sehr leid, dass es dir gerade so schlecht geht. Was du fühlst, ist ernst, und \
             du verdienst sofort Unterstützung.",
            "Danke, dass du mir das anvertraust. Ich mache mir Sorgen um dich und möchte, dass du \
             jetzt nicht allein bleibst.",
        ],
        Some(CRISIS_RESOURCES),
        Some(SuggestedAction::CrisisResources),
    ),
    (
        Category::SelfHarm,
        &[
            "Es tut mir leid, dass du so viel Schmerz in dir trägst. Du hast es verdient, dass dir \
             jemand hilft, damit umzugehen.",
            "Danke für dein Vertrauen. Wenn du daran denkst, dich zu verletzen, ist es wichtig, dass \
             du jetzt Hilfe bekommst.",
        ],
        Some(CRISIS_RESOURCES),
        Some(SuggestedAction::CrisisResources),
    ),
    (
        Category::Depression,
        &[
            "Das klingt sehr belastend. Niedergeschlagenheit und Antriebslosigkeit können alles \
             schwer machen, und du bist damit nicht allein.",
            "Es tut mir leid, dass du dich so fühlst. Solche Phasen sind kräftezehrend, und es ist \
             gut, dass du darüber sprichst.",
        ],
        Some("Seit wann fühlst du dich schon so, und gibt es Momente, in denen es etwas leichter ist?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::Anxiety,
        &[
            "Angst kann sehr überwältigend sein. Es ist verständlich, dass dich das mitnimmt.",
            "Das klingt, als würde dich die Angst gerade stark begleiten. Das ist anstrengend.",
        ],
        Some("In welchen Situationen merkst du die Angst am stärksten?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::Stress,
        &[
            "Das klingt nach ziemlich viel auf einmal. Dauerhafter Stress kann einen richtig \
             auslaugen.",
            "Es ist verständlich, dass du dich so fühlst, wenn so viel auf dich einprasselt.",
        ],
        Some("Was setzt dich im Moment am meisten unter Druck?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::Burnout,
        &[
            "Das klingt nach echter Erschöpfung. Wenn die Energie über längere Zeit fehlt, ist das \
             ein wichtiges Signal.",
            "Ausgebrannt zu sein ist kein Zeichen von Schwäche, sondern oft die Folge von zu langer \
             Überlastung.",
        ],
        Some("Hast du in letzter Zeit Gelegenheit gehabt, dich wirklich zu erholen?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::SelfWorth,
        &[
            "Es tut weh, so über sich selbst zu denken. Du bist mehr wert, als es sich gerade \
             anfühlt.",
            "Solche Gedanken über sich selbst können sehr belastend sein. Danke, dass du sie \
             aussprichst.",
        ],
        Some("Gibt es Situationen, in denen diese Gedanken besonders laut werden?"),
        None,
    ),
    (
        Category::Loneliness,
        &[
            "Sich einsam zu fühlen ist schmerzhaft. Schön, dass du dich hier meldest.",
            "Einsamkeit kann sehr schwer wiegen. Gerade jetzt bist du nicht allein in diesem \
             Gespräch.",
        ],
        Some("Gibt es Menschen in deinem Umfeld, mit denen du gern mehr Kontakt hättest?"),
        None,
    ),
    (
        Category::Relationship,
        &[
            "Schwierigkeiten in Beziehungen können einen sehr mitnehmen.",
            "Konflikte mit nahestehenden Menschen gehen oft besonders nah.",
        ],
        Some("Möchtest du mir erzählen, was zwischen euch gerade passiert?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::Trauma,
        &[
            "Danke, dass du mir davon erzählst. Was du erlebt hast, kann tiefe Spuren hinterlassen.",
            "Belastende Erfahrungen wie diese verdienen einen sicheren Raum und professionelle \
             Begleitung.",
        ],
        Some("Du entscheidest selbst, wie viel du erzählen möchtest. Unser Support-Team kann dir \
              helfen, spezialisierte Therapeut:innen zu finden."),
        Some(SuggestedAction::ContactSupport),
    ),
    (
        Category::Sleep,
        &[
            "Schlechter Schlaf kann alles andere noch schwerer machen.",
            "Wenn der Schlaf fehlt, leidet oft auch die Stimmung. Das ist sehr anstrengend.",
        ],
        Some("Liegt es eher am Einschlafen, am Durchschlafen oder an beidem?"),
        None,
    ),
    (
        Category::Grief,
        &[
            "Es tut mir sehr leid um deinen Verlust. Trauer braucht Zeit und Raum.",
            "Einen Verlust zu verarbeiten ist unglaublich schwer. Jede Form von Trauer ist in \
             Ordnung.",
        ],
        Some("Möchtest du mir von der Person oder dem Verlust erzählen?"),
        None,
    ),
    (
        Category::HelpSeeking,
        &[
            "Es ist ein wichtiger Schritt, sich Hilfe zu holen. Ich unterstütze dich gern dabei.",
            "Gut, dass du nach Unterstützung suchst. Gemeinsam finden wir einen passenden Weg.",
        ],
        Some("Wobei genau würdest du dir am meisten Unterstützung wünschen?"),
        Some(SuggestedAction::TakeAssessment),
    ),
    (
        Category::TherapyInquiry,
        &[
            "Gern erkläre ich dir, wie du bei uns passende Therapeut:innen findest.",
            "Gute Frage! Bei uns kannst du Therapeut:innen finden, die zu deinen Bedürfnissen \
             passen.",
        ],
        Some("Bei organisatorischen Fragen hilft dir auch unser Support-Team weiter."),
        Some(SuggestedAction::ContactSupport),
    ),
];

static DEFAULT_REGISTRY: LazyLock<TemplateRegistry> = LazyLock::new(|| {
    TemplateRegistry::new(
        DEFAULT_TEMPLATES
            .iter()
            .map(|(category, responses, follow_up, action)| ResponseTemplate {
                category: *category,
                responses: responses.iter().map(|s| s.to_string()).collect(),
                follow_up: follow_up.map(str::to_string),
                suggested_action: *action,
            })
            .collect(),
    )
});

/// Immutable category-to-template map.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<Category, ResponseTemplate>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        DEFAULT_REGISTRY.clone()
    }
}

impl TemplateRegistry {
    /// Builds the registry. Templates without response variants are skipped;
    /// for duplicate categories the earliest template is kept.
    pub fn new(templates: Vec<ResponseTemplate>) -> Self {
        let mut map = HashMap::with_capacity(templates.len());
        for template in templates {
            if template.responses.is_empty() {
                continue;
            }
            map.entry(template.category).or_insert(template);
        }
        Self { templates: map }
    }

    pub fn get(&self, category: Category) -> Option<&ResponseTemplate> {
        self.templates.get(&category)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(category: Category, text: &str) -> ResponseTemplate {
        ResponseTemplate {
            category,
            responses: vec![text.to_string()],
            follow_up: None,
            suggested_action: None,
        }
    }

    #[test]
    fn test_every_category_has_a_template() {
        let registry = TemplateRegistry::default();
        for category in Category::ALL {
            assert!(registry.get(category).is_some(), "missing template for {}", category);
        }
    }

    #[test]
    fn test_crisis_templates_carry_resources() {
        let registry = TemplateRegistry::default();
        for category in [Category::Crisis, Category::SelfHarm] {
            let t = registry.get(category).unwrap();
            assert_eq!(t.suggested_action, Some(SuggestedAction::CrisisResources));
            let follow_up = t.follow_up.as_deref().unwrap();
            assert!(follow_up.contains("112"));
            assert!(follow_up.contains("0800 111 0 111"));
        }
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = TemplateRegistry::new(vec![
            template(Category::Stress, "first"),
            template(Category::Stress, "second"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(Category::Stress).unwrap().responses[0], "first");
    }

    #[test]
    fn test_empty_variants_skipped() {
        let mut empty = template(Category::Sleep, "x");
        empty.responses.clear();
        let registry = TemplateRegistry::new(vec![empty, template(Category::Sleep, "kept")]);
        assert_eq!(registry.get(Category::Sleep).unwrap().responses[0], "kept");
    }
}
