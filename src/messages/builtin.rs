//! Built-in message templates for the base rule library.

use crate::messages::catalog::CatalogSet;

const EN: &[(&str, &str)] = &[
    ("required", "The {0} field is required."),
    ("min_length", "The {0} field must be at least {1} characters long."),
    ("max_length", "The {0} field cannot exceed {1} characters."),
    ("exact_length", "The {0} field must be exactly {1} characters long."),
    ("alpha", "The {0} field may only contain letters."),
    ("alpha_numeric", "The {0} field may only contain letters and digits."),
    (
        "alpha_dash",
        "The {0} field may only contain letters, digits, underscores and dashes.",
    ),
    ("regex_match", "The {0} field is not in the correct format."),
    ("in_list", "The {0} field must be one of: {1}."),
    ("numeric", "The {0} field must contain a number."),
    ("integer", "The {0} field must contain a whole number."),
    ("decimal", "The {0} field must contain a decimal number."),
    ("is_natural", "The {0} field must contain a positive number."),
    ("is_natural_no_zero", "The {0} field must contain a number greater than zero."),
    ("greater_than", "The {0} field must contain a number greater than {1}."),
    ("less_than", "The {0} field must contain a number less than {1}."),
    ("valid_email", "The {0} field must contain a valid e-mail address."),
    ("valid_emails", "The {0} field must contain valid e-mail addresses."),
    ("valid_url", "The {0} field must contain a valid URL."),
    ("valid_ip", "The {0} field must contain a valid IP address."),
];

const FR: &[(&str, &str)] = &[
    ("required", "Le champ {0} est requis."),
    ("min_length", "Le champ {0} doit contenir au moins {1} caractères."),
    ("max_length", "Le champ {0} ne peut pas dépasser {1} caractères."),
    ("exact_length", "Le champ {0} doit contenir exactement {1} caractères."),
    ("alpha", "Le champ {0} ne peut contenir que des lettres."),
    (
        "alpha_numeric",
        "Le champ {0} ne peut contenir que des lettres et des chiffres.",
    ),
    (
        "alpha_dash",
        "Le champ {0} ne peut contenir que des lettres, des chiffres, des tirets bas et des tirets.",
    ),
    ("regex_match", "Le champ {0} n'est pas au bon format."),
    ("in_list", "Le champ {0} doit contenir une de ces valeurs : {1}."),
    ("numeric", "Le champ {0} doit contenir un nombre."),
    ("integer", "Le champ {0} doit contenir un nombre entier."),
    ("decimal", "Le champ {0} doit contenir un nombre décimal."),
    ("is_natural", "Le champ {0} doit contenir un nombre positif."),
    (
        "is_natural_no_zero",
        "Le champ {0} doit contenir un nombre strictement positif.",
    ),
    ("greater_than", "Le champ {0} doit contenir un nombre supérieur à {1}."),
    ("less_than", "Le champ {0} doit contenir un nombre inférieur à {1}."),
    ("valid_email", "Le champ {0} doit contenir une adresse e-mail valide."),
    ("valid_emails", "Le champ {0} doit contenir des adresses e-mail valides."),
    ("valid_url", "Le champ {0} doit contenir une URL valide."),
    ("valid_ip", "Le champ {0} doit contenir une adresse IP valide."),
];

/// Register the `en` and `fr` templates.
pub fn register_all(set: &mut CatalogSet) {
    for (locale, messages) in [("en", EN), ("fr", FR)] {
        for (identifier, template) in messages {
            set.insert(locale, identifier, *template);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::catalog::MessageCatalog;
    use crate::rules::registry::RuleRegistry;

    #[test]
    fn test_every_builtin_rule_has_templates() {
        let set = CatalogSet::with_builtins();
        let rules = RuleRegistry::with_builtins();

        for id in rules.ids() {
            for locale in ["en", "fr"] {
                assert!(
                    set.template(id, locale).is_some(),
                    "missing '{}' template for rule '{}'",
                    locale,
                    id
                );
            }
        }
    }

    #[test]
    fn test_parameterized_templates_mention_parameter() {
        let set = CatalogSet::with_builtins();
        let rules = RuleRegistry::with_builtins();

        for (id, entry) in rules.entries().filter(|(_, e)| e.takes_parameter) {
            if id == "regex_match" {
                continue;
            }
            assert!(set.template(id, "en").unwrap().contains("{1}"), "{}", id);
            assert!(set.template(id, "fr").unwrap().contains("{1}"), "{}", id);
            assert!(entry.takes_parameter);
        }
    }
}
