use super::*;

#[derive(Parser)]
#[command(name = "location-card")]
#[command(
  about = "Rewrite authored location blocks into labeled sections",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    default_value = "location",
    help = "Prefix for the generated class names"
  )]
  class_prefix: String,
  #[arg(
    value_name = "FILE",
    help = "Path to the HTML file to rewrite, stdin when omitted"
  )]
  input: Option<PathBuf>,
  #[arg(long, help = "Print the extracted cards as JSON instead of HTML")]
  json: bool,
  #[arg(
    long,
    default_value = ".location",
    help = "CSS selector matching the blocks to rewrite"
  )]
  selector: String,
}

impl Arguments {
  fn read_input(&self) -> Result<String> {
    match &self.input {
      Some(path) => fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      }),
      None => {
        let mut html = String::new();

        io::stdin()
          .read_to_string(&mut html)
          .context("failed to read html from stdin")?;

        Ok(html)
      }
    }
  }

  pub(crate) fn run(self) -> Result {
    let html = self.read_input()?;

    let reformatter = Reformatter::new(
      ReformatOptions::builder()
        .block_selector(&self.selector)
        .class_prefix(&self.class_prefix)
        .build(),
    );

    if self.json {
      let cards = reformatter
        .cards(&html)
        .context("failed to extract location cards")?;

      println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
      println!(
        "{}",
        reformatter
          .reformat_html(&html)
          .context("failed to rewrite location blocks")?
      );
    }

    Ok(())
  }
}
