use crate::domain::model::MoNumber;

pub const DEFAULT_MO_HOST: &str = "mushroomobserver.org";

/// The spellings of an MO observation URL found in the iNaturalist custom
/// field, in the order they are queried. The custom field is matched by exact
/// string equality, so these must stay literal.
pub fn candidate_urls(mo_host: &str, mo_number: &MoNumber) -> Vec<String> {
    let paths = [
        format!("observer/show_observation/{}", mo_number),
        mo_number.to_string(),
        format!("obs/{}", mo_number),
    ];

    paths
        .iter()
        .flat_map(|path| {
            ["http", "https"]
                .into_iter()
                .map(move |scheme| format!("{}://{}/{}", scheme, mo_host, path))
        })
        .collect()
}
