/// Цена в целых единицах валюты (без копеек, без налогов)
pub type Price = u64;

/// Трейт для элементов статического каталога (пакеты, доп. услуги)
///
/// Калькулятор стоимости работает через этот трейт, поэтому принимает
/// любой срез записей, а не только встроенные каталоги.
pub trait CatalogEntry {
    /// Идентификатор, на который ссылается черновик бронирования
    fn id(&self) -> &str;

    /// Отображаемое название
    fn name(&self) -> &str;

    /// Цена записи
    fn price(&self) -> Price;
}

/// Найти запись каталога по идентификатору
pub fn find_entry<'a, E: CatalogEntry>(catalog: &'a [E], id: &str) -> Option<&'a E> {
    catalog.iter().find(|entry| entry.id() == id)
}

/// Цена записи по идентификатору; неизвестный идентификатор стоит 0
pub fn price_of<E: CatalogEntry>(catalog: &[E], id: &str) -> Price {
    find_entry(catalog, id).map(CatalogEntry::price).unwrap_or(0)
}
