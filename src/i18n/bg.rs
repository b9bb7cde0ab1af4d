// ============================================================================
// msgcat - Bulgarian Message Table
// ============================================================================
//
// File: src/i18n/bg.rs
// Role: Bulgarian message templates
// Boundaries:
//   - ✅ Bulgarian templates keyed by message key
//   - ✅ `{name}` placeholders for parameterized messages
//   - ❌ Should not contain lookup or formatting logic
//   - ❌ Should not contain other languages
//
// ============================================================================

/// Bulgarian message table
pub const MESSAGES: &[(&str, &str)] = &[
    // General
    ("hello", "Здравей"),
    ("welcome", "Добре дошли в Driplo"),
    ("loading", "Зареждане..."),
    ("price", "Цена"),
    // Navigation
    ("nav_home", "Начало"),
    ("nav_search", "Търсене"),
    ("nav_sell", "Продай"),
    ("nav_messages", "Съобщения"),
    ("nav_profile", "Профил"),
    ("nav_favorites", "Любими"),
    ("nav_orders", "Поръчки"),
    ("nav_settings", "Настройки"),
    ("nav_logout", "Изход"),
    ("nav_login", "Вход"),
    ("nav_signup", "Регистрация"),
    ("nav_startSelling", "Започни да продаваш"),
    ("nav_browseCategories", "Разгледай категориите"),
    // Search
    ("search_placeholder", "Търсете артикули, марки..."),
    ("search_filter", "Филтър"),
    ("search_sort", "Сортиране"),
    ("search_results", "Резултати"),
    ("search_noResults", "Няма намерени резултати"),
    ("search_categories", "Категории"),
    ("search_all", "Всички"),
    ("search_itemsFound", "артикула намерени"),
    ("search_for", "за"),
    ("search_filters", "Филтри"),
    ("search_quickFilters", "Бързи филтри"),
    ("search_size", "Размер"),
    // Product page
    ("product_addToCart", "Добави в количката"),
    ("product_buyNow", "Купи сега"),
    ("product_favorite", "Любими"),
    ("product_share", "Сподели"),
    ("product_size", "Размер"),
    ("product_condition", "Състояние"),
    ("product_brand", "Марка"),
    ("product_description", "Описание"),
    ("product_seller", "Продавач"),
    ("product_reviews", "Отзиви"),
    ("product_similar", "Подобни артикули"),
    ("product_sold", "Продадено"),
    ("product_available", "Налично"),
    ("product_new", "Нов"),
    ("product_likeNew", "Като нов"),
    ("product_good", "Добър"),
    // Common actions
    ("common_cancel", "Отказ"),
    ("common_save", "Запази"),
    ("common_delete", "Изтрий"),
    ("common_edit", "Редактирай"),
    ("common_close", "Затвори"),
    ("common_confirm", "Потвърди"),
    ("common_yes", "Да"),
    ("common_no", "Не"),
    ("common_ok", "ОК"),
    ("common_back", "Назад"),
    ("common_next", "Напред"),
    ("common_previous", "Предишен"),
    ("common_submit", "Изпрати"),
    ("common_currency", "лв"),
    // Authentication
    ("auth_signIn", "Вход"),
    ("auth_signUp", "Регистрация"),
    ("auth_signOut", "Изход"),
    ("auth_email", "Имейл"),
    ("auth_password", "Парола"),
    ("auth_confirmPassword", "Потвърди парола"),
    ("auth_firstName", "Име"),
    ("auth_lastName", "Фамилия"),
    ("auth_username", "Потребителско име"),
    ("auth_forgotPassword", "Забравена парола?"),
    // Checkout
    ("checkout_summary", "Обобщение на поръчката"),
    ("checkout_subtotal", "Междинна сума"),
    ("checkout_shipping", "Доставка"),
    ("checkout_tax", "Данък"),
    ("checkout_total", "Общо"),
    ("checkout_proceedToPayment", "Продължи към плащане"),
    ("checkout_placeOrder", "Поръчай"),
    ("checkout_orderPlaced", "Поръчката е направена успешно!"),
    ("checkout_paymentMethod", "Метод на плащане"),
    ("checkout_shippingAddress", "Адрес за доставка"),
    // Dashboard
    ("dashboard_welcomeBack", "Добре дошъл, {username}!"),
    ("dashboard_shopStatus", "Ето какво се случва с твоя магазин днес."),
    ("dashboard_newListing", "Нова обява"),
    ("dashboard_soldItems", "Продадени артикули"),
    ("dashboard_earnings", "Печалби"),
    ("dashboard_upgrade", "Надгради"),
    ("dashboard_adminPanel", "Админ панел"),
    ("dashboard_analytics", "Аналитики"),
    ("dashboard_settings", "Настройки"),
    ("dashboard_availableBalance", "Наличен баланс"),
    ("dashboard_sales", "Продажби"),
    ("dashboard_minutesAgo", "преди {minutes} мин"),
    ("dashboard_hoursAgo", "преди {hours} ч"),
    ("dashboard_daysAgo", "преди {days} дн"),
    // Sell flow
    ("sell_includes", "включва"),
    ("sell_selected", "избрано"),
    ("sell_accessoriesList", "списък с аксесоари"),
    ("sell_categoryTitle", "Избери категория"),
    ("sell_categoryDescription", "Избери категорията, която най-добре описва твоя артикул"),
    ("sell_beMoreSpecific", "Бъди по-конкретен"),
    ("sell_optional", "(опционално)"),
    ("sell_typeCategoryPlaceholder", "Въведи категория..."),
    ("sell_photoCount", "{count} снимка"),
    ("sell_photosCount", "{count} снимки"),
    ("sell_photosUploaded", "{count} снимк{s} качени"),
    ("sell_moreAllowed", "още {count} позволени"),
    ("sell_morePhotos", "+{count} още"),
    ("sell_reviewYourListing", "Прегледай обявата си"),
    ("sell_photosSection", "Снимки"),
    ("sell_productAlt", "Продукт"),
    // Errors
    ("error_generic", "Нещо се обърка"),
    ("error_network", "Мрежова грешка. Опитайте отново."),
    ("error_notFound", "Страницата не е намерена"),
    ("error_unauthorized", "Неоторизиран достъп"),
    ("error_validation", "Моля проверете въведената информация"),
    ("error_tryAgain", "Опитай отново"),
    ("error_notAuthenticated", "Не сте удостоверени"),
    ("error_atLeastOnePhoto", "Необходима е поне една снимка"),
    (
        "error_categoryRequired",
        "Категорията е задължителна. Моля изберете категория за вашия артикул.",
    ),
    ("error_failedToCreateProduct", "Неуспешно създаване на продукт"),
    // Pagination
    ("pagination_showing", "Показване на"),
    ("pagination_of", "от"),
    ("pagination_results", "резултати"),
    ("pagination_page", "Страница"),
    ("pagination_goToPage", "Отиди на страница"),
    // Orders
    ("orders_title", "Моите поръчки"),
    ("orders_subtitle", "Следете своите покупки и продажби на едно място"),
    ("orders_allOrders", "Всички поръчки"),
    ("orders_purchases", "Покупки"),
    ("orders_itemsToShip", "Артикули за изпращане"),
    ("orders_totalOrders", "Общо поръчки"),
    ("orders_ship", "Изпрати"),
    ("orders_shipped", "Изпратено"),
];
