use serde::Serialize;

/// One team row of a conference standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub team: String,
    /// Text of the division header row this team was listed under
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<String>,
    /// Stat columns in the order they were first set
    #[serde(skip)]
    stats: Vec<Column>,
}

impl Standing {
    pub fn new(team: String, division: Option<String>) -> Self {
        Self {
            team,
            division,
            wins: None,
            losses: None,
            stats: vec![],
        }
    }

    pub fn with_stat(mut self, column: Column, value: &str) -> Self {
        self.set_stat(column, value.to_string());
        self
    }

    /// Sets a stat, keeping its column position if it was set before
    pub fn set_stat(&mut self, column: Column, value: String) {
        match column {
            Column::Team => {
                self.team = value;
                return;
            }
            Column::Wins => self.wins = Some(value),
            Column::Losses => self.losses = Some(value),
        }
        if !self.stats.contains(&column) {
            self.stats.push(column);
        }
    }

    /// Columns this record carries, in display order. `division` is left out, it is shown as a
    /// group header instead.
    pub fn columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::Team];
        columns.extend(
            self.stats
                .iter()
                .copied()
                .filter(|column| self.value(*column).is_some()),
        );
        columns
    }

    /// Number of fields set on this record, division included
    pub fn field_count(&self) -> usize {
        self.columns().len() + 1
    }

    pub fn value(&self, column: Column) -> Option<&str> {
        match column {
            Column::Team => Some(&self.team),
            Column::Wins => self.wins.as_deref(),
            Column::Losses => self.losses.as_deref(),
        }
    }

    pub fn division_name(&self) -> &str {
        self.division.as_deref().unwrap_or("")
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{team} ({division}) {wins}-{losses}",
            team = self.team,
            division = self.division_name(),
            wins = self.wins.as_deref().unwrap_or("?"),
            losses = self.losses.as_deref().unwrap_or("?")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Team,
    Wins,
    Losses,
}

impl Column {
    /// Stat column tagged by a `data-stat` value, if it is one we keep
    pub fn from_stat(stat: &str) -> Option<Column> {
        match stat {
            "wins" => Some(Column::Wins),
            "losses" => Some(Column::Losses),
            _ => None,
        }
    }

    /// Header label for rendered tables. The team column goes without one.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Team => "",
            Column::Wins => "Wins",
            Column::Losses => "Losses",
        }
    }
}
