use rand::Rng;

#[derive(serde::Serialize)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub items: Vec<Item>,
}

#[derive(serde::Serialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub rank: u32,
    pub is_draft: bool,
    pub tags: Vec<String>,
}

fn word(rng: &mut impl Rng, n: usize) -> String {
    (0..n).map(|_| rng.gen_range('a'..='z')).collect()
}

pub fn random(n: usize) -> Feed {
    let mut rng = rand::thread_rng();
    let title = word(&mut rng, 20);
    let link = format!("https://{}.example.com/?a=1&b=2", word(&mut rng, 8));
    let items = (0..n)
        .map(|_| Item {
            title: word(&mut rng, 20),
            // Some text that needs escaping.
            description: format!("{} < {} & {}", word(&mut rng, 10), word(&mut rng, 5), word(&mut rng, 5)),
            rank: rng.gen_range(1..1000),
            is_draft: rng.gen_ratio(1, 4),
            tags: (0..rng.gen_range(0..4)).map(|_| word(&mut rng, 6)).collect(),
        })
        .collect();
    Feed { title, link, items }
}
