/// One program invocation within a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStage {
    pub program: String,
    pub args: Vec<String>,
}

impl PipelineStage {
    /// Builds a stage from whitespace-separated tokens. `None` when there are none.
    fn from_tokens(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Non-empty chain of stages joined by `|`.
///
/// There is no quoting or escaping, so neither a pipe nor whitespace can
/// appear inside an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<PipelineStage>,
}

impl Pipeline {
    /// Splits a raw line into stages. Stages without tokens are dropped;
    /// `None` means there is nothing to run.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let stages: Vec<PipelineStage> = input
            .split('|')
            .filter_map(PipelineStage::from_tokens)
            .collect();

        if stages.is_empty() {
            return None;
        }

        Some(Self { stages })
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Whitespace-separated tokens of a whole line, pipes included verbatim.
pub fn words(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(program: &str, args: &[&str]) -> PipelineStage {
        PipelineStage {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_two_stages() {
        let pipeline = Pipeline::parse("echo hi | tr h H").expect("pipeline");
        assert_eq!(
            pipeline.stages(),
            [stage("echo", &["hi"]), stage("tr", &["h", "H"])]
        );
    }

    #[test]
    fn test_parse_single_stage() {
        let pipeline = Pipeline::parse("  ls   -la\t/tmp ").expect("pipeline");
        assert_eq!(pipeline.stages(), [stage("ls", &["-la", "/tmp"])]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(Pipeline::parse("").is_none());
        assert!(Pipeline::parse("   ").is_none());
        assert!(Pipeline::parse(" \t ").is_none());
    }

    #[test]
    fn test_parse_drops_empty_stages() {
        let pipeline = Pipeline::parse("ls | | wc -l |").expect("pipeline");
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.stages()[1], stage("wc", &["-l"]));

        assert!(Pipeline::parse(" | | ").is_none());
    }

    #[test]
    fn test_parse_pipe_without_spaces() {
        let pipeline = Pipeline::parse("cat file|sort|uniq").expect("pipeline");
        let programs: Vec<_> = pipeline.stages().iter().map(|s| s.program.as_str()).collect();
        assert_eq!(programs, ["cat", "sort", "uniq"]);
    }

    #[test]
    fn test_words_keep_pipes() {
        assert_eq!(words("cd /tmp | ls"), ["cd", "/tmp", "|", "ls"]);
        assert!(words("  ").is_empty());
    }
}
