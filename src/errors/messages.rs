use std::str::FromStr;

pub const INTERNAL_ERROR: &str = "error.internal";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Locale {
    #[default]
    English,
    Dutch
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::English),
            "nl" | "nl-nl" | "nl-be" => Ok(Locale::Dutch),
            other => Err(format!("Unsupported locale '{other}'"))
        }
    }
}

impl Locale {
    /// Resolves a message code, filling `{0}`, `{1}`, ... from `args`. Unknown codes are echoed back.
    pub fn message(self, code: &str, args: &[String]) -> String {
        let Some(template) = self.template(code) else {
            return code.to_string()
        };

        args.iter().enumerate().fold(template.to_string(), |message, (index, arg)| {
            message.replace(&format!("{{{index}}}"), arg)
        })
    }

    fn template(self, code: &str) -> Option<&'static str> {
        let template = match (self, code) {
            (Locale::English, "validation.file.empty") => "The uploaded file is empty",
            (Locale::English, "validation.file.name.empty") => "The uploaded file has no name",
            (Locale::English, "validation.file.invalidExtension") => "The uploaded file has no valid extension",
            (Locale::English, "validation.file.notSupported") => "Files with extension '{0}' are not supported",
            (Locale::English, "validation.json.invalid") => "The uploaded JSON must contain an array of records",
            (Locale::English, INTERNAL_ERROR) => "Something went wrong while processing the upload",
            (Locale::Dutch, "validation.file.empty") => "Het geüploade bestand is leeg",
            (Locale::Dutch, "validation.file.name.empty") => "Het geüploade bestand heeft geen naam",
            (Locale::Dutch, "validation.file.invalidExtension") => "Het geüploade bestand heeft geen geldige extensie",
            (Locale::Dutch, "validation.file.notSupported") => "Bestanden met extensie '{0}' worden niet ondersteund",
            (Locale::Dutch, "validation.json.invalid") => "De geüploade JSON moet een lijst met records bevatten",
            (Locale::Dutch, INTERNAL_ERROR) => "Er ging iets mis bij het verwerken van de upload",
            _ => return None
        };

        Some(template)
    }
}
