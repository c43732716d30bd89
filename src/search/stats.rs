use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counts of search nodes by depth.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Returns true when this is the first node created at this depth.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn count_at(counts: &[usize], depth: usize) -> usize {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            created.saturating_sub(visited).separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));
        let depths = self
            .created_states
            .len()
            .max(self.visited_states.len())
            .max(self.duplicate_states.len());
        for depth in 0..depths {
            let created = Self::count_at(&self.created_states, depth);
            let visited = Self::count_at(&self.visited_states, depth);
            let duplicates = Self::count_at(&self.duplicate_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&created.saturating_sub(visited).separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_created(2));
        assert!(!stats.add_created(2));
        assert!(stats.add_unique_visited(0));
        assert!(stats.add_reached_duplicate(1));

        assert_eq!(stats.created_states, vec![1, 0, 2]);
        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
    }

    #[test]
    fn summary_uses_separators() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(1);
        }
        let summary = stats.to_string();
        assert!(summary.contains("States created total: 1,234"));
        assert!(summary.contains("Created but not reached total: 1,234"));
    }

    #[test]
    fn depth_table() {
        let mut stats = Stats::new();
        stats.add_created(0);
        stats.add_unique_visited(0);
        stats.add_created(1);
        stats.add_created(1);
        stats.add_unique_visited(1);
        stats.add_reached_duplicate(1);
        let summary = stats.to_string();

        let titles = summary.lines().find(|line| line.contains("Depth")).unwrap();
        assert!(titles.contains("Unknown (not reached)"));
        let row = summary
            .lines()
            .find(|line| line.trim_start().starts_with("1:"))
            .unwrap();
        let counts: Vec<_> = row.split_whitespace().skip(1).collect();
        assert_eq!(counts, vec!["2", "1", "1", "1"]);
    }
}
