//! Terminal output formatting.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use sh_core::grades::model::CourseWithGrades;
use sh_core::grades::{self, course_average, letter_grade, overall_average, total_weight};
use sh_core::homework::model::{Homework, Priority};
use sh_core::homework::{days_until, split_completed};
use sh_core::schedule::model::{ClassSession, Color, Weekday};
use unicode_width::UnicodeWidthStr;

/// Relative wording for a due date.
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    match days_until(due, today) {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("in {} days", d),
    }
}

fn priority_colored(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "high".red(),
        Priority::Medium => "medium".yellow(),
        Priority::Low => "low".green(),
    }
}

fn class_colored(name: &str, color: Color) -> ColoredString {
    match color {
        Color::Blue => name.blue(),
        Color::Green => name.green(),
        Color::Purple => name.magenta(),
        Color::Yellow => name.yellow(),
        Color::Red => name.red(),
        Color::Orange => name.truecolor(255, 140, 0),
        Color::Pink => name.truecolor(255, 105, 180),
    }
}

/// Print the homework view: pending first, completed after.
pub fn print_homework(homework: &[Homework], today: NaiveDate) {
    if homework.is_empty() {
        println!("{}", "No homework. Add one with 'schoolhelper homework add'.".dimmed());
        return;
    }

    let (pending, completed) = split_completed(homework);

    println!("{}", "Pending".bold());
    print_homework_rows(&pending, today);

    if !completed.is_empty() {
        println!();
        println!("{}", "Completed".bold());
        print_homework_rows(&completed, today);
    }

    println!();
    println!("{} pending, {} done", pending.len(), completed.len());
}

fn print_homework_rows(rows: &[&Homework], today: NaiveDate) {
    if rows.is_empty() {
        println!("{}", "  (nothing here)".dimmed());
        return;
    }
    for hw in rows {
        let mark = if hw.completed { "✓".green() } else { "○".normal() };
        println!(
            "  {} {:<10} {} {} {} {}",
            mark,
            &hw.id[..hw.id.len().min(8)].dimmed(),
            pad_right(&hw.subject, 18).bold(),
            pad_right(&truncate_visual(&hw.task, 36), 36),
            priority_colored(hw.priority),
            due_label(hw.due_date, today).cyan()
        );
    }
}

/// Print the dashboard's upcoming-homework card.
pub fn print_upcoming(upcoming: &[Homework], today: NaiveDate) {
    println!("{}", "Upcoming homework".bold());
    if upcoming.is_empty() {
        println!("{}", "  Nothing due. Nice.".dimmed());
        return;
    }
    for hw in upcoming {
        println!(
            "  • {} — {} ({})",
            hw.subject.bold(),
            truncate_visual(&hw.task, 40),
            due_label(hw.due_date, today).cyan()
        );
    }
}

/// Print the full grade sheet: overall average, then each course with its
/// entries and the weight-coverage advisory.
pub fn print_grade_sheet(courses: &[CourseWithGrades]) {
    print_overall(courses);
    println!("{}", "─".repeat(term_width().min(72)));

    for course in courses {
        println!();
        let avg = course_average(&course.grades);
        println!(
            "{} {} — {:.1}% ({})",
            course.course.name.cyan().bold(),
            format!("({})", &course.course.id[..course.course.id.len().min(8)]).dimmed(),
            avg,
            letter_grade(avg)
        );

        let weight = total_weight(&course.grades);
        if (weight - 100.0).abs() > f64::EPSILON {
            // Advisory only; partial weights still average correctly.
            println!(
                "  {}",
                format!("total weight {:.0}% ({:.0}% remaining)", weight, 100.0 - weight).yellow()
            );
        }

        if course.grades.is_empty() {
            println!("{}", "  no grades yet".dimmed());
            continue;
        }
        for grade in &course.grades {
            println!(
                "  {:<10} {} {:>6.1}%  weight {:.0}%",
                &grade.id[..grade.id.len().min(8)].dimmed(),
                pad_right(&truncate_visual(&grade.name, 28), 28),
                grade.score,
                grade.weight
            );
        }
    }

    if courses.is_empty() {
        println!();
        println!("{}", "No courses. Add one with 'schoolhelper grades add-course'.".dimmed());
    }
}

/// Print the overall-average headline.
pub fn print_overall(courses: &[CourseWithGrades]) {
    let overall = overall_average(courses);
    println!(
        "{} {:.1}% ({}) across {} course(s)",
        "Overall average:".bold(),
        overall,
        grades::letter_grade(overall),
        courses.len()
    );
}

/// Print the dashboard's recent-grades card (first three entries).
pub fn print_recent_grades(courses: &[CourseWithGrades]) {
    println!("{}", "Recent grades".bold());
    let mut shown = 0;
    for course in courses {
        for grade in &course.grades {
            if shown == 3 {
                return;
            }
            println!(
                "  • {} — {}: {:.0}%",
                course.course.name.bold(),
                grade.name,
                grade.score
            );
            shown += 1;
        }
    }
    if shown == 0 {
        println!("{}", "  No grades yet.".dimmed());
    }
}

/// Print the weekly schedule board.
pub fn print_schedule(grouped: &[(Weekday, Vec<&ClassSession>)]) {
    for (day, sessions) in grouped {
        println!("{}", day.as_str().bold());
        if sessions.is_empty() {
            println!("{}", "  (no classes)".dimmed());
        }
        for s in sessions {
            println!(
                "  {:<10} {:<14} {} — {}, {}",
                &s.id[..s.id.len().min(8)].dimmed(),
                s.time,
                class_colored(&pad_right(&s.name, 20), s.color),
                s.teacher,
                s.room
            );
        }
        println!();
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthStr::width(c.to_string().as_str());
        if width + cw > max_width - 3 {
            break;
        }
        out.push(c);
        width += cw;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    #[test]
    fn test_due_label_wording() {
        let today = d(10);
        assert_eq!(due_label(d(10), today), "today");
        assert_eq!(due_label(d(11), today), "tomorrow");
        assert_eq!(due_label(d(9), today), "yesterday");
        assert_eq!(due_label(d(7), today), "3 days ago");
        assert_eq!(due_label(d(14), today), "in 4 days");
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a longer string", 10), "a longe...");
        assert_eq!(truncate_visual("abcdef", 3), "...");
    }

    #[test]
    fn test_pad_right_uses_visual_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        // Full-width characters take two columns.
        assert_eq!(pad_right("数学", 6), "数学  ");
    }
}
