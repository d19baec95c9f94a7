use rpawogen::form::*;
use rpawogen::passgen::{CharacterClass, seeded_rng};
use rpawogen::setclip::{Clipboard, ClipboardError};
use std::io;

// 记录复制内容的剪贴板
#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
    scheduled: Vec<String>,
    fail: bool,
    fail_schedule: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Spawn(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
        }
        self.copied.push(text.to_string());
        Ok(())
    }

    fn schedule_clear(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_schedule {
            return Err(ClipboardError::Spawn(io::Error::new(io::ErrorKind::NotFound, "no helper")));
        }
        self.scheduled.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_form() -> PasswordForm {
        PasswordForm::new(LengthBounds::default(), 12, false)
    }

    #[test]
    fn test_new_form_is_empty_and_hidden() {
        let form = new_form();
        assert_eq!(form.password(), "");
        assert!(!form.is_visible());
        assert_eq!(form.length(), 12);
        assert_eq!(form.strength().score, 0);
    }

    #[test]
    fn test_generate_uses_current_length() {
        let mut form = new_form();
        form.set_length(20);
        let password = form.generate(&mut seeded_rng(5)).to_string();
        assert_eq!(password.chars().count(), 20);
        assert_eq!(form.password(), password);
        assert_eq!(form.strength().score, 5);
        for class in CharacterClass::ALL {
            assert!(password.chars().any(|c| class.contains(c)));
        }
    }

    #[test]
    fn test_length_is_clamped() {
        let mut form = new_form();
        assert_eq!(form.set_length(3), 8);
        assert_eq!(form.set_length(100), 32);
        assert_eq!(form.step_length(true), 32);
        form.set_length(8);
        assert_eq!(form.step_length(false), 8);
        assert_eq!(form.step_length(true), 9);
        let clamped = PasswordForm::new(LengthBounds { min: 10, max: 16 }, 40, false);
        assert_eq!(clamped.length(), 16);
    }

    #[test]
    fn test_masking_follows_visibility() {
        let mut form = PasswordForm::with_password("Ab1@abcd", false);
        assert_eq!(form.displayed_password(), "••••••••");
        assert!(form.toggle_visibility());
        assert_eq!(form.displayed_password(), "Ab1@abcd");
        assert!(!form.toggle_visibility());
    }

    #[test]
    fn test_mask_counts_graphemes() {
        let form = PasswordForm::with_password("e\u{301}a", false);
        assert_eq!(form.displayed_password(), "••");
    }

    #[test]
    fn test_copy_sends_password() {
        let mut form = new_form();
        form.generate(&mut seeded_rng(11));
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(form.copy(&mut clipboard), CopyNotice::Copied);
        assert_eq!(clipboard.copied, vec![form.password().to_string()]);
        assert_eq!(clipboard.scheduled, vec![form.password().to_string()]);
    }

    #[test]
    fn test_copy_reported_when_auto_clear_cannot_start() {
        let mut form = new_form();
        form.generate(&mut seeded_rng(12));
        let mut clipboard = RecordingClipboard { fail_schedule: true, ..Default::default() };
        let notice = form.copy(&mut clipboard);
        assert!(matches!(notice, CopyNotice::CopiedWithoutAutoClear(_)));
        assert!(notice.to_string().starts_with("Password copied to clipboard"));
        assert!(!notice.to_string().contains("Could not copy"));
        assert_eq!(clipboard.copied, vec![form.password().to_string()]);
        assert!(clipboard.scheduled.is_empty());
    }

    #[test]
    fn test_copy_without_password_is_noop() {
        let form = new_form();
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(form.copy(&mut clipboard), CopyNotice::NothingToCopy);
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_copy_failure_is_reported_and_keeps_state() {
        let mut form = new_form();
        form.generate(&mut seeded_rng(2));
        let before = form.password().to_string();
        let mut clipboard = RecordingClipboard { fail: true, ..Default::default() };
        let notice = form.copy(&mut clipboard);
        assert!(matches!(notice, CopyNotice::Failed(_)));
        assert!(clipboard.scheduled.is_empty());
        assert!(notice.to_string().starts_with("Could not copy password"));
        assert_eq!(form.password(), before);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(FormAction::parse("g"), Ok(FormAction::Generate));
        assert_eq!(FormAction::parse(" v \n"), Ok(FormAction::ToggleVisibility));
        assert_eq!(FormAction::parse("copy"), Ok(FormAction::Copy));
        assert_eq!(FormAction::parse("l 16"), Ok(FormAction::SetLength(16)));
        assert_eq!(FormAction::parse("+"), Ok(FormAction::Increase));
        assert_eq!(FormAction::parse("-"), Ok(FormAction::Decrease));
        assert_eq!(FormAction::parse("q"), Ok(FormAction::Quit));
        assert!(FormAction::parse("l").is_err());
        assert!(FormAction::parse("l abc").is_err());
        assert!(FormAction::parse("g now").is_err());
        assert!(FormAction::parse("zz").is_err());
        assert!(FormAction::parse("").is_err());
    }

    #[test]
    fn test_apply_actions() {
        let mut form = new_form();
        let mut rng = seeded_rng(8);
        let mut clipboard = RecordingClipboard::default();

        assert_eq!(form.apply(FormAction::Generate, &mut rng, &mut clipboard), ActionOutcome::Continue(None));
        assert_eq!(form.password().chars().count(), 12);

        let outcome = form.apply(FormAction::SetLength(50), &mut rng, &mut clipboard);
        assert!(matches!(outcome, ActionOutcome::Continue(Some(_))));
        assert_eq!(form.length(), 32);

        let outcome = form.apply(FormAction::Copy, &mut rng, &mut clipboard);
        assert_eq!(outcome, ActionOutcome::Continue(Some("Password copied to clipboard!".to_string())));
        assert_eq!(clipboard.copied.len(), 1);

        assert_eq!(form.apply(FormAction::Quit, &mut rng, &mut clipboard), ActionOutcome::Quit);
    }

    #[test]
    fn test_scale_labels() {
        assert_eq!(LengthBounds::default().scale_labels(), vec![8, 12, 16, 20, 24, 28, 32]);
    }

    #[test]
    fn test_render_strength_checklist() {
        let form = PasswordForm::with_password("abcdefgh", true);
        let text = render_strength(&form.strength());
        assert!(text.contains("Weak password. Must contain:"));
        assert!(text.contains("✓ At least 8 characters - Requirement met"));
        assert!(text.contains("✗ At least 1 number - Requirement not met"));
        assert!(text.contains("40%"));
    }

    #[test]
    fn test_render_meter_fill() {
        let empty = PasswordForm::with_password("", false).strength();
        assert_eq!(render_meter(&empty), format!("[{}] 0%", "░".repeat(20)));
        let full = PasswordForm::with_password("Ab1@abcd", false).strength();
        assert_eq!(render_meter(&full), format!("[{}] 100% ++", "█".repeat(20)));
    }

    #[test]
    fn test_render_form_masks_password() {
        let mut form = new_form();
        form.generate(&mut seeded_rng(4));
        let hidden = form.render();
        assert!(!hidden.contains(form.password()));
        assert!(hidden.contains("Password Length: 12"));
        form.toggle_visibility();
        assert!(form.render().contains(form.password()));
    }

    #[test]
    fn test_scale_marker_follows_length() {
        assert_eq!(render_scale(LengthBounds::default(), 8), "  8   12  16  20  24  28  32\n  ^");
        assert_eq!(render_scale(LengthBounds::default(), 13), format!("  8   12  16  20  24  28  32\n  {}^", " ".repeat(5)));
    }

    #[test]
    fn test_scale_keeps_wide_labels_apart() {
        let bounds = LengthBounds { min: 998, max: 1010 };
        let scale = render_scale(bounds, 1002);
        let mut lines = scale.lines();
        let labels: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(labels, vec!["998", "1002", "1006", "1010"]);
        assert_eq!(lines.next().unwrap(), format!("  {}^", " ".repeat(5)));
    }

    #[test]
    fn test_hidden_password_hint() {
        assert!(hidden_password_hint(false, false).is_some());
        assert_eq!(hidden_password_hint(true, false), None);
        assert_eq!(hidden_password_hint(false, true), None);
        assert_eq!(hidden_password_hint(true, true), None);
    }
}
