#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    pub prefix: String,
    pub option: String,
    pub column_name: Option<String>,
    pub threshold: f64,
    pub output: String,
    pub render_output: bool,
}

impl CliConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut prefix = None;
        let mut option = None;
        let mut column_name = None;
        let mut threshold = 1.0_f64;
        let mut output = String::from("comparison-report.html");
        let mut render_output = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--prefix" | "-p" => {
                    prefix = Some(
                        iter.next()
                            .ok_or_else(|| "--prefix requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--option" | "-o" => {
                    option = Some(
                        iter.next()
                            .ok_or_else(|| "--option requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--column-name" | "-c" => {
                    column_name = Some(
                        iter.next()
                            .ok_or_else(|| "--column-name requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--threshold" | "-t" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--threshold requires a value".to_string())?;
                    threshold = value
                        .parse()
                        .map_err(|_| format!("invalid threshold {value}"))?;
                }
                "--output" => {
                    output = iter
                        .next()
                        .ok_or_else(|| "--output requires a value".to_string())?
                        .to_string();
                }
                "--renderoutput" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--renderoutput requires a value".to_string())?;
                    render_output = *value == "true";
                }
                other => {
                    return Err(format!("unknown flag {other}"));
                }
            }
        }
        let prefix = prefix.ok_or_else(|| "--prefix is required".to_string())?;
        let option = option.ok_or_else(|| "--option is required".to_string())?;
        if option == "compare_column" && column_name.is_none() {
            return Err("--column-name is required for compare_column".to_string());
        }
        Ok(Self {
            prefix,
            option,
            column_name,
            threshold,
            output,
            render_output,
        })
    }

    /// Metric columns requested via `--column-name`, `;`-separated.
    pub fn column_list(&self) -> Vec<&str> {
        self.column_name
            .as_deref()
            .map(|names| names.split(';').collect())
            .unwrap_or_default()
    }

    pub fn help() -> &'static str {
        "Usage: loadcompare --prefix PREFIX --option OPTION [flags]\n\
         \n\
         Options:\n\
         \x20 create_baseline          promote PREFIX_stats.csv to the baseline\n\
         \x20 create_comparison_stats  write PREFIX_comparison_stats.csv\n\
         \x20 compare_column           gate new/old ratios for --column-name\n\
         \n\
         Flags:\n\
         \x20 -p, --prefix PREFIX      prefix of the load-test CSV files (required)\n\
         \x20 -o, --option OPTION      operation to run (required)\n\
         \x20 -c, --column-name LIST   ';'-separated metric columns to compare\n\
         \x20 -t, --threshold FLOAT    allowed ratio factor (default: 1.0)\n\
         \x20     --output FILE        HTML report file (default: comparison-report.html)\n\
         \x20     --renderoutput true  render the HTML report\n"
    }
}
