use indexmap::IndexMap;

/// Premade `ElevenLabs` voices addressable by name
const BUILTIN: &[(&str, &str)] = &[
    ("Rachel", "21m00Tcm4TlvDq8ikWAM"),
    ("Domi", "AZnzlk1XvdvUeBnXmlld"),
    ("Bella", "EXAVITQu4vr4xnAQuHfH"),
    ("Antoni", "ErXwobaYiN019PkySvjV"),
    ("Elli", "MF3mGyEYCl7XYWbV9V6O"),
    ("Josh", "TxGEqnHWrfWFTfGW9XjX"),
    ("Arnold", "VR6AewLTigWG4xSOukaG"),
    ("Adam", "pNInz6obpgDQGcFmaJgB"),
    ("Sam", "yoZ06aMxZJJ28mfd3POQ"),
];

/// Built-in alias table, in declaration order
pub fn builtin_aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    BUILTIN.iter().copied()
}

/// Voice alias table mapping friendly names to provider voice IDs
#[derive(Debug, Clone)]
pub struct VoiceAliases {
    aliases: IndexMap<String, String>,
}

impl Default for VoiceAliases {
    fn default() -> Self {
        Self {
            aliases: builtin_aliases()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
        }
    }
}

impl VoiceAliases {
    /// Built-in table with configured entries layered on top
    pub fn with_overrides(overrides: &IndexMap<String, String>) -> Self {
        let mut table = Self::default();
        for (name, id) in overrides {
            table.aliases.insert(name.clone(), id.clone());
        }
        table
    }

    /// Resolve an alias to a provider voice ID
    ///
    /// Exact matches win over case-insensitive ones. Anything that is not an
    /// alias is returned unchanged and treated as a raw voice ID.
    pub fn resolve<'a>(&'a self, voice: &'a str) -> &'a str {
        if let Some(id) = self.aliases.get(voice) {
            return id;
        }

        self.aliases
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(voice))
            .map_or(voice, |(_, id)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
