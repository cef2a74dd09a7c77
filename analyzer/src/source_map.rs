/// Maps byte offsets of one source text to 1-based `(line, column)` pairs.
#[derive(Debug, Clone)]
pub struct SourceMap {
    newlines: Vec<u32>,
}

impl SourceMap {
    pub fn new(src: &str) -> Self {
        let newlines = src.match_indices('\n').map(|(i, _)| i as u32).collect();
        SourceMap { newlines }
    }

    /// Columns count bytes from the start of the line.
    pub fn line_col(&self, offset: u32) -> (usize, usize) {
        let line = self.newlines.partition_point(|&nl| nl < offset);
        let line_start = match line {
            0 => 0,
            n => self.newlines[n - 1] + 1,
        };
        (line + 1, (offset - line_start) as usize + 1)
    }
}
