// ============================================================================
// msgcat - Ukrainian Message Table
// ============================================================================
//
// File: src/i18n/ua.rs
// Role: Ukrainian message templates
// Boundaries:
//   - ✅ Ukrainian templates keyed by message key
//   - ✅ `{name}` placeholders for parameterized messages
//   - ❌ Should not contain lookup or formatting logic
//   - ❌ Should not contain other languages
//
// ============================================================================

/// Ukrainian message table
pub const MESSAGES: &[(&str, &str)] = &[
    // General
    ("hello", "Привіт"),
    ("welcome", "Ласкаво просимо до Driplo"),
    ("loading", "Завантаження..."),
    ("price", "Ціна"),
    // Navigation
    ("nav_home", "Головна"),
    ("nav_search", "Пошук"),
    ("nav_sell", "Продати"),
    ("nav_messages", "Повідомлення"),
    ("nav_profile", "Профіль"),
    ("nav_favorites", "Обране"),
    ("nav_orders", "Замовлення"),
    ("nav_settings", "Налаштування"),
    ("nav_logout", "Вихід"),
    ("nav_login", "Вхід"),
    ("nav_signup", "Реєстрація"),
    ("nav_startSelling", "Почати продавати"),
    ("nav_browseCategories", "Переглянути категорії"),
    // Search
    ("search_placeholder", "Шукати товари, бренди..."),
    ("search_filter", "Фільтр"),
    ("search_sort", "Сортування"),
    ("search_results", "Результати"),
    ("search_noResults", "Результатів не знайдено"),
    ("search_categories", "Категорії"),
    ("search_all", "Всі"),
    ("search_itemsFound", "товарів знайдено"),
    ("search_for", "для"),
    ("search_filters", "Фільтри"),
    ("search_quickFilters", "Швидкі фільтри"),
    ("search_size", "Розмір"),
    // Product page
    ("product_addToCart", "До кошика"),
    ("product_buyNow", "Купити зараз"),
    ("product_favorite", "В обране"),
    ("product_share", "Поділитися"),
    ("product_size", "Розмір"),
    ("product_condition", "Стан"),
    ("product_brand", "Бренд"),
    ("product_description", "Опис"),
    ("product_seller", "Продавець"),
    ("product_reviews", "Відгуки"),
    ("product_similar", "Схожі товари"),
    ("product_sold", "Продано"),
    ("product_available", "Доступно"),
    ("product_new", "Новий"),
    ("product_likeNew", "Як новий"),
    ("product_good", "Хороший"),
    // Common actions
    ("common_cancel", "Скасувати"),
    ("common_save", "Зберегти"),
    ("common_delete", "Видалити"),
    ("common_edit", "Редагувати"),
    ("common_close", "Закрити"),
    ("common_confirm", "Підтвердити"),
    ("common_yes", "Так"),
    ("common_no", "Ні"),
    ("common_ok", "ОК"),
    ("common_back", "Назад"),
    ("common_next", "Далі"),
    ("common_previous", "Попередній"),
    ("common_submit", "Відправити"),
    ("common_currency", "₴"),
    // Authentication
    ("auth_signIn", "Увійти"),
    ("auth_signUp", "Реєстрація"),
    ("auth_signOut", "Вийти"),
    ("auth_email", "Email"),
    ("auth_password", "Пароль"),
    ("auth_confirmPassword", "Підтвердіть пароль"),
    ("auth_firstName", "Ім'я"),
    ("auth_lastName", "Прізвище"),
    ("auth_username", "Ім'я користувача"),
    ("auth_forgotPassword", "Забули пароль?"),
    // Checkout
    ("checkout_summary", "Зведення замовлення"),
    ("checkout_subtotal", "Підсумок"),
    ("checkout_shipping", "Доставка"),
    ("checkout_tax", "Податок"),
    ("checkout_total", "Разом"),
    ("checkout_proceedToPayment", "Перейти до оплати"),
    ("checkout_placeOrder", "Оформити замовлення"),
    ("checkout_orderPlaced", "Замовлення успішно оформлено!"),
    ("checkout_paymentMethod", "Спосіб оплати"),
    ("checkout_shippingAddress", "Адреса доставки"),
    // Dashboard
    ("dashboard_welcomeBack", "З поверненням, {username}!"),
    ("dashboard_shopStatus", "Ось що відбувається з вашим магазином сьогодні."),
    ("dashboard_newListing", "Нове оголошення"),
    ("dashboard_soldItems", "Продані товари"),
    ("dashboard_earnings", "Заробітки"),
    ("dashboard_upgrade", "Покращити"),
    ("dashboard_adminPanel", "Адмін панель"),
    ("dashboard_analytics", "Аналітика"),
    ("dashboard_settings", "Налаштування"),
    ("dashboard_availableBalance", "Доступний баланс"),
    ("dashboard_minutesAgo", "{minutes} хв тому"),
    ("dashboard_hoursAgo", "{hours} год тому"),
    ("dashboard_daysAgo", "{days} дн тому"),
    // Sell flow
    ("sell_includes", "включає"),
    ("sell_selected", "вибрано"),
    ("sell_accessoriesList", "список аксесуарів"),
    ("sell_categoryTitle", "Обрати категорію"),
    ("sell_categoryDescription", "Оберіть категорію, яка найкраще описує ваш товар"),
    ("sell_beMoreSpecific", "Будьте точнішими"),
    ("sell_optional", "(необов'язково)"),
    ("sell_typeCategoryPlaceholder", "Введіть категорію..."),
    ("sell_photoCount", "{count} фото"),
    ("sell_photosCount", "{count} фото"),
    ("sell_photosUploaded", "{count} фото завантажено"),
    ("sell_moreAllowed", "ще {count} дозволено"),
    ("sell_morePhotos", "+{count} ще"),
    ("sell_reviewYourListing", "Переглянути ваше оголошення"),
    ("sell_photosSection", "Фотографії"),
    ("sell_productAlt", "Товар"),
    // Errors
    ("error_generic", "Щось пішло не так"),
    ("error_network", "Помилка мережі. Спробуйте ще раз."),
    ("error_notFound", "Сторінка не знайдена"),
    ("error_unauthorized", "Несанкціонований доступ"),
    ("error_validation", "Будь ласка, перевірте ваше введення"),
    ("error_tryAgain", "Спробувати ще раз"),
    ("error_notAuthenticated", "Не автентифіковано"),
    ("error_atLeastOnePhoto", "Потрібна принаймні одна фотографія"),
    (
        "error_categoryRequired",
        "Категорія обов'язкова. Будь ласка, оберіть категорію для вашого товару.",
    ),
    ("error_failedToCreateProduct", "Не вдалося створити товар"),
    // Pagination
    ("pagination_showing", "Показано"),
    ("pagination_of", "з"),
    ("pagination_results", "результатів"),
    ("pagination_page", "Сторінка"),
    ("pagination_goToPage", "Перейти на сторінку"),
    // Orders
    ("orders_title", "Мої замовлення"),
    ("orders_subtitle", "Відстежуйте свої покупки та продажі в одному місці"),
    ("orders_allOrders", "Всі замовлення"),
    ("orders_purchases", "Покупки"),
];
