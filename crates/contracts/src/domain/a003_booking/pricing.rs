use super::draft::BookingDraft;
use crate::domain::common::{find_entry, price_of, CatalogEntry, Price};
use serde::Serialize;

/// Итоговая стоимость черновика
///
/// Цена пакета плюс цены выбранных доп. услуг. Ссылки, которых нет в
/// каталоге, дают 0 (fail-open). Без округления, налогов и конвертации.
/// Сумма насыщается на `Price::MAX` вместо переполнения.
pub fn total<P, A>(draft: &BookingDraft, packages: &[P], add_ons: &[A]) -> Price
where
    P: CatalogEntry,
    A: CatalogEntry,
{
    draft
        .selected_add_on_ids
        .iter()
        .map(|id| price_of(add_ons, id))
        .fold(price_of(packages, &draft.selected_package_id), Price::saturating_add)
}

/// One row of the review summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLine {
    pub label: String,
    pub amount: Price,
    pub is_add_on: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceSummary {
    pub lines: Vec<PriceLine>,
    pub total: Price,
}

/// Itemised summary: the resolved package first, then resolved add-ons in
/// catalog order. Unresolved references produce no line.
pub fn summarize<P, A>(draft: &BookingDraft, packages: &[P], add_ons: &[A]) -> PriceSummary
where
    P: CatalogEntry,
    A: CatalogEntry,
{
    let mut lines = Vec::new();

    if let Some(package) = find_entry(packages, &draft.selected_package_id) {
        lines.push(PriceLine {
            label: format!("{} Package", package.name()),
            amount: package.price(),
            is_add_on: false,
        });
    }

    lines.extend(
        add_ons
            .iter()
            .filter(|add_on| draft.has_add_on(add_on.id()))
            .map(|add_on| PriceLine {
                label: add_on.name().to_string(),
                amount: add_on.price(),
                is_add_on: true,
            }),
    );

    PriceSummary {
        lines,
        total: total(draft, packages, add_ons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_package::aggregate::PACKAGES;
    use crate::domain::a002_add_on::aggregate::ADD_ONS;
    use crate::domain::a003_booking::draft::DraftField;

    struct Entry(&'static str, Price);

    impl CatalogEntry for Entry {
        fn id(&self) -> &str {
            self.0
        }
        fn name(&self) -> &str {
            self.0
        }
        fn price(&self) -> Price {
            self.1
        }
    }

    fn draft_with(package: &str, add_ons: &[&str]) -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.set_field(DraftField::Package(package.into()));
        for id in add_ons {
            draft.toggle_add_on(id);
        }
        draft
    }

    #[test]
    fn test_essential_with_two_add_ons() {
        let draft = draft_with("essential", &["extra-hour", "photo-booth"]);
        assert_eq!(total(&draft, PACKAGES, ADD_ONS), 999);
    }

    #[test]
    fn test_unknown_package_fails_open() {
        let draft = draft_with("unknown-id", &[]);
        assert_eq!(total(&draft, PACKAGES, ADD_ONS), 0);
    }

    #[test]
    fn test_unknown_add_on_contributes_zero() {
        let draft = draft_with("premium", &["drone", "rush-delivery"]);
        assert_eq!(total(&draft, PACKAGES, ADD_ONS), 1099);
    }

    #[test]
    fn test_total_ignores_selection_order() {
        let a = draft_with("luxury", &["same-day-edit", "engagement", "extra-album"]);
        let b = draft_with("luxury", &["extra-album", "same-day-edit", "engagement"]);
        assert_eq!(total(&a, PACKAGES, ADD_ONS), total(&b, PACKAGES, ADD_ONS));
        assert_eq!(total(&a, PACKAGES, ADD_ONS), 1599 + 400 + 300 + 200);
    }

    #[test]
    fn test_custom_catalogs() {
        let packages = [Entry("basic", 10)];
        let add_ons = [Entry("x", 1), Entry("y", 2)];
        let draft = draft_with("basic", &["y"]);
        assert_eq!(total(&draft, &packages, &add_ons), 12);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let packages = [Entry("big", u32::MAX as Price)];
        let add_ons = [Entry("x", 1)];
        let draft = draft_with("big", &["x"]);
        assert_eq!(total(&draft, &packages, &add_ons), u32::MAX as Price + 1);

        let packages = [Entry("huge", Price::MAX - 1)];
        let add_ons = [Entry("x", 1), Entry("y", 2)];
        let draft = draft_with("huge", &["x", "y"]);
        assert_eq!(total(&draft, &packages, &add_ons), Price::MAX);
        assert_eq!(summarize(&draft, &packages, &add_ons).total, Price::MAX);
    }

    #[test]
    fn test_summary_lines_follow_catalog_order() {
        let draft = draft_with("premium", &["rush-delivery", "extra-hour", "ghost"]);
        let summary = summarize(&draft, PACKAGES, ADD_ONS);

        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Premium Package", "Additional Hour", "Rush Delivery"]);
        assert_eq!(summary.total, 999 + 150 + 100);
        assert!(!summary.lines[0].is_add_on);
    }

    #[test]
    fn test_summary_without_package() {
        let draft = draft_with("", &["engagement"]);
        let summary = summarize(&draft, PACKAGES, ADD_ONS);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, 300);
    }
}
