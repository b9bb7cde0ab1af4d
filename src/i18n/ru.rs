// ============================================================================
// msgcat - Russian Message Table
// ============================================================================
//
// File: src/i18n/ru.rs
// Role: Russian message templates
// Boundaries:
//   - ✅ Russian templates keyed by message key
//   - ✅ `{name}` placeholders for parameterized messages
//   - ❌ Should not contain lookup or formatting logic
//   - ❌ Should not contain other languages
//
// ============================================================================

/// Russian message table
pub const MESSAGES: &[(&str, &str)] = &[
    // General
    ("hello", "Привет"),
    ("welcome", "Добро пожаловать в Driplo"),
    ("loading", "Загрузка..."),
    ("price", "Цена"),
    // Navigation
    ("nav_home", "Главная"),
    ("nav_search", "Поиск"),
    ("nav_sell", "Продать"),
    ("nav_messages", "Сообщения"),
    ("nav_profile", "Профиль"),
    ("nav_favorites", "Избранное"),
    ("nav_orders", "Заказы"),
    ("nav_settings", "Настройки"),
    ("nav_logout", "Выход"),
    ("nav_login", "Вход"),
    ("nav_signup", "Регистрация"),
    ("nav_startSelling", "Начать продавать"),
    ("nav_browseCategories", "Просмотр категорий"),
    // Search
    ("search_placeholder", "Искать товары, бренды..."),
    ("search_filter", "Фильтр"),
    ("search_sort", "Сортировка"),
    ("search_results", "Результаты"),
    ("search_noResults", "Результаты не найдены"),
    ("search_categories", "Категории"),
    ("search_all", "Все"),
    ("search_itemsFound", "товаров найдено"),
    ("search_for", "для"),
    ("search_filters", "Фильтры"),
    ("search_quickFilters", "Быстрые фильтры"),
    ("search_size", "Размер"),
    // Product page
    ("product_addToCart", "В корзину"),
    ("product_buyNow", "Купить сейчас"),
    ("product_favorite", "В избранное"),
    ("product_share", "Поделиться"),
    ("product_size", "Размер"),
    ("product_condition", "Состояние"),
    ("product_brand", "Бренд"),
    ("product_description", "Описание"),
    ("product_seller", "Продавец"),
    ("product_reviews", "Отзывы"),
    ("product_similar", "Похожие товары"),
    ("product_sold", "Продано"),
    ("product_available", "Доступно"),
    ("product_new", "Новый"),
    ("product_likeNew", "Как новый"),
    ("product_good", "Хорошее"),
    // Common actions
    ("common_cancel", "Отмена"),
    ("common_save", "Сохранить"),
    ("common_delete", "Удалить"),
    ("common_edit", "Редактировать"),
    ("common_close", "Закрыть"),
    ("common_confirm", "Подтвердить"),
    ("common_yes", "Да"),
    ("common_no", "Нет"),
    ("common_ok", "ОК"),
    ("common_back", "Назад"),
    ("common_next", "Далее"),
    ("common_previous", "Предыдущий"),
    ("common_submit", "Отправить"),
    ("common_currency", "₽"),
    // Authentication
    ("auth_signIn", "Войти"),
    ("auth_signUp", "Регистрация"),
    ("auth_signOut", "Выйти"),
    ("auth_email", "Email"),
    ("auth_password", "Пароль"),
    ("auth_confirmPassword", "Подтвердите пароль"),
    ("auth_firstName", "Имя"),
    ("auth_lastName", "Фамилия"),
    ("auth_username", "Имя пользователя"),
    ("auth_forgotPassword", "Забыли пароль?"),
    // Checkout
    ("checkout_summary", "Сводка заказа"),
    ("checkout_subtotal", "Подытог"),
    ("checkout_shipping", "Доставка"),
    ("checkout_tax", "Налог"),
    ("checkout_total", "Итого"),
    ("checkout_proceedToPayment", "Перейти к оплате"),
    ("checkout_placeOrder", "Оформить заказ"),
    ("checkout_orderPlaced", "Заказ успешно оформлен!"),
    ("checkout_paymentMethod", "Способ оплаты"),
    ("checkout_shippingAddress", "Адрес доставки"),
    // Dashboard
    ("dashboard_welcomeBack", "С возвращением, {username}!"),
    ("dashboard_shopStatus", "Вот что происходит с вашим магазином сегодня."),
    ("dashboard_newListing", "Новое объявление"),
    ("dashboard_soldItems", "Проданные товары"),
    ("dashboard_earnings", "Заработок"),
    ("dashboard_upgrade", "Улучшить"),
    ("dashboard_adminPanel", "Админ панель"),
    ("dashboard_analytics", "Аналитика"),
    ("dashboard_settings", "Настройки"),
    ("dashboard_availableBalance", "Доступный баланс"),
    ("dashboard_minutesAgo", "{minutes} мин назад"),
    ("dashboard_hoursAgo", "{hours} ч назад"),
    ("dashboard_daysAgo", "{days} дн назад"),
    // Sell flow
    ("sell_includes", "включает"),
    ("sell_selected", "выбрано"),
    ("sell_accessoriesList", "список аксессуаров"),
    ("sell_categoryTitle", "Выбрать категорию"),
    ("sell_categoryDescription", "Выберите категорию, которая лучше всего описывает ваш товар"),
    ("sell_beMoreSpecific", "Будьте точнее"),
    ("sell_optional", "(необязательно)"),
    ("sell_typeCategoryPlaceholder", "Введите категорию..."),
    ("sell_photoCount", "{count} фото"),
    ("sell_photosCount", "{count} фото"),
    ("sell_photosUploaded", "{count} фото загружено"),
    ("sell_moreAllowed", "ещё {count} разрешено"),
    // Errors
    ("error_generic", "Что-то пошло не так"),
    ("error_network", "Ошибка сети. Попробуйте еще раз."),
    ("error_notFound", "Страница не найдена"),
    ("error_unauthorized", "Несанкционированный доступ"),
    ("error_validation", "Пожалуйста, проверьте ваш ввод"),
    ("error_tryAgain", "Попробовать еще раз"),
    // Pagination
    ("pagination_showing", "Показано"),
    ("pagination_of", "из"),
    ("pagination_results", "результатов"),
    ("pagination_page", "Страница"),
    ("pagination_goToPage", "Перейти на страницу"),
    // Orders
    ("orders_title", "Мои заказы"),
    ("orders_subtitle", "Отслеживайте свои покупки и продажи в одном месте"),
    ("orders_allOrders", "Все заказы"),
    ("orders_purchases", "Покупки"),
];
