use clap::Args;
use orrery_request::{ContentKind, classify};

#[derive(Clone, Debug, Args)]
pub struct ClassifyArg {
    #[arg(required = true)]
    pub urls: Vec<String>,
}

impl ClassifyArg {
    pub fn run(&self) {
        for url in &self.urls {
            println!("{:<6} {url}", kind_label(classify(url)));
        }
    }
}

pub fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Binary => "binary",
        ContentKind::Text => "text",
    }
}
