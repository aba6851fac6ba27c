use rand::distributions::Alphanumeric;
use rand::Rng;

// Function to generate a random identifier-safe string
pub fn random_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

// Function to generate a random reverse domain such as `org.abcde.fg`
pub fn random_domain(components: usize, len: usize) -> String {
    (0..components)
        .map(|_| random_string(len))
        .collect::<Vec<_>>()
        .join(".")
}

// Function to generate a schema request with `n_attributes` string attributes,
// a hash key and a descending timeuuid version column
pub fn random_request(n_attributes: usize) -> String {
    let mut attributes = vec![
        r#""key": "string""#.to_string(),
        r#""tid": "timeuuid""#.to_string(),
    ];
    for _ in 0..n_attributes {
        attributes.push(format!(r#""{}": "string""#, random_string(12)));
    }
    format!(
        r#"{{
            "table": "{}",
            "attributes": {{ {} }},
            "index": [
                {{ "attribute": "key", "type": "hash" }},
                {{ "attribute": "tid", "type": "range", "order": "desc" }}
            ]
        }}"#,
        random_string(10),
        attributes.join(", ")
    )
}
