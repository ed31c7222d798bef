//! Teletext-style page showing a league table and a scorer leaderboard.

use super::colors::*;
use crate::constants::ui::{
    HEADER_TITLE, PAGE_NUMBER, SCORER_NAME_WIDTH, SCORER_TEAM_WIDTH, TEAM_COLUMN_WIDTH,
};
use crate::standings::{ScorerStanding, StandingsReport, TeamStanding};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads or truncates `text` to exactly `width` terminal columns.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push_str(&" ".repeat(width - used));
    fitted
}

/// Formats a goal difference with an explicit sign, teletext style.
pub fn format_goal_difference(goal_difference: i64) -> String {
    if goal_difference > 0 {
        format!("+{goal_difference}")
    } else {
        goal_difference.to_string()
    }
}

fn team_row_text(position: usize, row: &TeamStanding) -> String {
    format!(
        "{:>3}. {} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
        position,
        fit_to_width(&row.team, TEAM_COLUMN_WIDTH),
        row.played,
        row.wins,
        row.draws,
        row.losses,
        row.goals_for,
        row.goals_against,
        format_goal_difference(row.goal_difference),
        row.points
    )
}

fn scorer_row_text(row: &ScorerStanding) -> String {
    format!(
        "{:>3}. {} {} {:>3}",
        row.rank,
        fit_to_width(&row.name, SCORER_NAME_WIDTH),
        fit_to_width(&row.team, SCORER_TEAM_WIDTH),
        row.goals
    )
}

/// A renderable standings page.
#[derive(Debug, Clone)]
pub struct StandingsPage<'a> {
    report: &'a StandingsReport,
    subtitle: String,
    date: String,
    plain: bool,
    show_table: bool,
    show_scorers: bool,
    scorer_limit: Option<usize>,
}

impl<'a> StandingsPage<'a> {
    pub fn new(report: &'a StandingsReport, plain: bool) -> Self {
        Self {
            report,
            subtitle: String::new(),
            date: chrono::Local::now().format("%d.%m.").to_string(),
            plain,
            show_table: true,
            show_scorers: true,
            scorer_limit: None,
        }
    }

    /// Squad description shown next to the competition, e.g. "U13 Féminin".
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_sections(mut self, show_table: bool, show_scorers: bool) -> Self {
        self.show_table = show_table;
        self.show_scorers = show_scorers;
        self
    }

    pub fn with_scorer_limit(mut self, limit: Option<usize>) -> Self {
        self.scorer_limit = limit;
        self
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_header(out)?;

        if self.show_table {
            self.render_table(out)?;
        }
        if self.show_scorers {
            if self.show_table {
                queue!(out, Print("\n"))?;
            }
            self.render_scorers(out)?;
        }

        out.flush()
    }

    fn line<W: Write>(&self, out: &mut W, text: &str, fg: Color) -> io::Result<()> {
        if self.plain {
            queue!(out, Print(text), Print("\n"))
        } else {
            queue!(
                out,
                SetForegroundColor(fg),
                Print(text),
                ResetColor,
                Print("\n")
            )
        }
    }

    fn render_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let title = format!(" {PAGE_NUMBER} {HEADER_TITLE}");
        let header_width = 5 + TEAM_COLUMN_WIDTH + 30;
        let padding = header_width.saturating_sub(title.width() + self.date.width() + 1);
        let header = format!("{title}{}{} ", " ".repeat(padding), self.date);

        if self.plain {
            queue!(out, Print(&header), Print("\n"))?;
        } else {
            queue!(
                out,
                SetBackgroundColor(header_bg()),
                SetForegroundColor(header_fg()),
                Print(&header),
                ResetColor,
                Print("\n")
            )?;
        }

        let mut subheader = format!(
            " {}  {}",
            self.report.club_name.to_uppercase(),
            self.report.competition.heading()
        );
        if !self.subtitle.is_empty() {
            subheader.push_str("  ");
            subheader.push_str(&self.subtitle);
        }
        self.line(out, &subheader, subheader_fg())?;
        queue!(out, Print("\n"))
    }

    fn render_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.report.teams.is_empty() {
            return self.line(out, " Aucun match joué", notice_fg());
        }

        let heading = format!(
            "{:>4} {} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4} {:>3}",
            "",
            fit_to_width("Équipe", TEAM_COLUMN_WIDTH),
            "J",
            "G",
            "N",
            "P",
            "BP",
            "BC",
            "Diff",
            "Pts"
        );
        self.line(out, &heading, subheader_fg())?;

        for (i, row) in self.report.teams.iter().enumerate() {
            let fg = if row.team == self.report.club_name {
                club_fg()
            } else {
                text_fg()
            };
            self.line(out, &team_row_text(i + 1, row), fg)?;
        }
        Ok(())
    }

    fn render_scorers<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.line(out, " BUTEURS", subheader_fg())?;

        if self.report.scorers.is_empty() {
            return self.line(out, " Aucun buteur", notice_fg());
        }

        let limit = self.scorer_limit.unwrap_or(self.report.scorers.len());
        for row in self.report.scorers.iter().take(limit) {
            let fg = if row.is_club_player {
                club_fg()
            } else {
                points_fg()
            };
            self.line(out, &scorer_row_text(row), fg)?;
        }
        Ok(())
    }
}
