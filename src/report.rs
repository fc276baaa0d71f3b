#[derive(serde::Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    pub word: String,
    pub count: usize,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<&'a [String]>,
    pub probes: Vec<Probe>,
}

impl Report<'_> {
    pub fn to_text(&self) -> String {
        self.words
            .into_iter()
            .flatten()
            .map(|word| format!("{word}\n"))
            .chain(
                self.probes
                    .iter()
                    .map(|probe| format!("\t{} : {}\n", probe.word, probe.count)),
            )
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
