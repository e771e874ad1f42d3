use super::template::EndpointTemplate;

pub(super) const LEADERBOARD: &[&str] = &["/leaderboard"];

pub(super) const DASHBOARD: &[&str] = &[
    "/dashboard/avgLeitnersHitrate",
    "/dashboard/difficultwords/lesson/8",
    "/dashboard/easywords/lesson/8",
    "/dashboard/globaleasywords",
    "/dashboard/globaldifficultwords",
];

pub(super) const UPDATE_WORD: &[&str] = &[
    "/username/*/wordId/#/result/true",
    "/username/*/wordId/#/result/false",
];

pub(super) const GET_WORDS: &[&str] = &[
    "/username/*/level/8/without_wrong_answers",
    "/username/*/level/8",
];

/// Endpoint templates grouped by the scenario that drives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTable {
    pub leaderboard: Vec<EndpointTemplate>,
    pub dashboard: Vec<EndpointTemplate>,
    pub update_word: Vec<EndpointTemplate>,
    pub get_words: Vec<EndpointTemplate>,
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self {
            leaderboard: templates(LEADERBOARD),
            dashboard: templates(DASHBOARD),
            update_word: templates(UPDATE_WORD),
            get_words: templates(GET_WORDS),
        }
    }
}

fn templates(raw: &[&str]) -> Vec<EndpointTemplate> {
    raw.iter().copied().map(EndpointTemplate::new).collect()
}
