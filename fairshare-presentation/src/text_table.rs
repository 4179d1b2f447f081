use std::borrow::Cow;

const COLUMN_GAP: &str = "  ";
const RULE: char = '-';

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    /// Renders a header line, a rule, then one line per row.
    ///
    /// Cells past the header count are dropped. Trailing whitespace is trimmed.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().take(col_count).enumerate() {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }

        let mut table = String::with_capacity(
            (col_widths.iter().sum::<usize>() + col_count * COLUMN_GAP.len() + 1)
                * (self.rows.len() + 2),
        );

        self.push_line(&mut table, self.headers, &col_widths);
        let rule: Vec<Cow<'_, str>> = col_widths
            .iter()
            .map(|width| Cow::Owned(RULE.to_string().repeat(*width)))
            .collect();
        self.push_line(&mut table, &rule, &col_widths);
        for row in &self.rows {
            self.push_line(&mut table, row.as_ref(), &col_widths);
        }

        table.truncate(table.trim_end().len());
        table
    }

    fn push_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map_or("", |cell| cell.as_ref());
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, *width, alignment);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn pad_cell(line: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let gap = width.saturating_sub(display_width(cell));
    let (before, after) = match alignment {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
    };
    line.extend(std::iter::repeat_n(' ', before));
    line.push_str(cell);
    line.extend(std::iter::repeat_n(' ', after));
}

/// Terminal column estimate: East Asian wide characters take two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_simple_table() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed("Name"), Cow::Borrowed("Balance")])
            .row([Cow::Borrowed("Alice"), Cow::Borrowed("+100")])
            .row([Cow::Borrowed("Bob"), Cow::Borrowed("-100")])
            .build();

        assert_eq!(
            table,
            "Name   Balance\n-----  -------\nAlice     +100\nBob       -100"
        );
    }

    #[rstest]
    fn test_missing_and_extra_cells() {
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Right, Alignment::Left])
            .headers(&[Cow::Borrowed("Who"), Cow::Borrowed("Note")])
            .row(vec![Cow::Borrowed("A")])
            .row(vec![
                Cow::Borrowed("Carol"),
                Cow::Borrowed("paid"),
                Cow::Borrowed("dropped"),
            ])
            .build();

        assert_eq!(table, "  Who  Note\n-----  ----\n    A\nCarol  paid");
    }

    #[rstest]
    #[case::ascii("Member", 6)]
    #[case::rupee("₹12.50", 6)]
    #[case::kana("メンバー", 8)]
    fn test_display_width(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(display_width(input), expected);
    }

    #[rstest]
    fn test_empty_headers() {
        let table: String = TextTableBuilder::<Vec<Cow<'static, str>>>::new()
            .row(vec![Cow::Borrowed("orphan")])
            .build();
        assert!(table.is_empty());
    }
}
