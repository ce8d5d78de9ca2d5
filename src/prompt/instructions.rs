//! Instruction templates for commit message generation.
//!
//! These are carried as-is from the shipped prompt set; wording changes here
//! change the model's output style, so edit with care.

/// Placeholder substituted with the user's free-text instructions in
/// [`CUSTOM_TEMPLATE`].
pub const CUSTOM_PLACEHOLDER: &str = "{custom_instructions}";

pub const ENGLISH_SHORT: &str = r#"Generate a concise Git commit message based on the provided diff. Follow these rules:
1. Use the format: <type>(<filename/scope>): <description>
2. Types:
- feat: for new features or significant updates
- fix: for bug fixes
- docs: for documentation changes
- style: for formatting, missing semi-colons, etc.
- refactor: for restructuring code without changing its behavior
- test: for adding or changing tests
- chore: for small tasks, maintenance, or trivial changes
- perf: for performance improvements
- ci: for CI/CD pipeline updates
- build: for changes that affect the build system or dependencies
3. Keep the entire message under 50 characters
4. Use imperative mood (e.g., "Add" not "Added")
5. Focus on the overall change, not specific details
6. mention filename in scope without prefix and without line numbers

Few shot examples:
1. Diff: Added new user authentication feature
   Message: feat(index): Add user authentication

2. Diff: Fixed bug in payment processing
   Message: fix(index): Resolve payment processing issue

3. Diff: Updated README with new installation steps
   Message: docs(index): Update installation instructions

4. Diff: Reformatted code to follow style guide
   Message: style(index): Apply consistent code formatting

5. Diff: Restructured database queries for efficiency
   Message: refactor(index): Optimize database queries"#;

pub const ENGLISH_LONG: &str = r#"Create a detailed Git commit message based on the provided diff. Follow these guidelines:
1. First line: <type>(<filename/scope>): <short summary> (50 chars or less)
2. Types:
- feat: for new features or significant updates
- fix: for bug fixes
- docs: for documentation changes
- style: for formatting, missing semi-colons, etc.
- refactor: for restructuring code without changing its behavior
- test: for adding or changing tests
- chore: for small tasks, maintenance, or trivial changes
- perf: for performance improvements
- ci: for CI/CD pipeline updates
- build: for changes that affect the build system or dependencies
3. Leave a blank line after the first line
4. Subsequent lines: detailed description (wrap at 72 chars)
5. Use imperative mood in all lines
6. Explain what and why, not how
7. Mention significant changes and their impact
8. mention filename in scope without prefix and without line numbers
9. Maximum 5 lines total (including blank line)

Few shot examples:
1. Diff: Implemented user registration and login functionality
   Message: feat(index): Add user authentication system

   Implement secure user registration and login processes
   Integrate email verification for new accounts
   Enhance overall application security

2. Diff: Fixed critical bug causing data loss during backup
   Message: fix(index): Resolve data loss issue in backup process

   Identify and patch vulnerability in backup routine
   Implement additional data integrity checks
   Improve error handling and logging for backups

3. Diff: Updated API documentation with new endpoints
   Message: docs(index): Enhance API documentation

   Add descriptions for newly implemented API endpoints
   Include usage examples and response formats
   Update authentication requirements section

4. Diff: Refactored database access layer for better performance
   Message: refactor(index): Optimize database operations

   Implement connection pooling for improved efficiency
   Rewrite inefficient queries using proper indexing
   Add caching layer for frequently accessed data"#;

pub const RUSSIAN_SHORT: &str = r#"Сгенерируйте краткое сообщение о фиксации в Git на основе предоставленного diff. Следуйте этим правилам:
1. Используйте формат: <тип>(<файл/скоп>): <описание>.
2. Типы:
- feat: for new features or significant updates
- fix: for bug fixes
- docs: for documentation changes
- style: for formatting, missing semi-colons, etc.
- refactor: for restructuring code without changing its behavior
- test: for adding or changing tests
- chore: for small tasks, maintenance, or trivial changes
- perf: for performance improvements
- ci: for CI/CD pipeline updates
- build: for changes that affect the build system or dependencies
3. Не превышайте 50 символов во всем сообщении
4. Используйте повелительное наклонение (например, «Добавьте», а не «Добавил»).
5. Сосредоточьтесь на общем изменении, а не на конкретных деталях
6. упоминайте имя файла в области видимости без префикса и без номеров строк

Примеры:
1. Diff: Добавлена новая функция аутентификации пользователей
   Сообщение: feat(index): Добавил аутентификацию пользователей

2. Diff: Исправлен баг в обработке платежей
   Сообщение: fix(index): Исправил обработку платежей

3. Diff: Обновлен README с новыми шагами установки
   Сообщение: docs(index): Обновил инструкции по установке

4. Diff: Отформатирован код в соответствии с руководством по стилю
   Сообщение: style(index): Применил единый стиль кода

5. Diff: Реструктурированы запросы к базе данных для эффективности
   Сообщение: refactor(index): Оптимизировал запросы к БД"#;

pub const RUSSIAN_LONG: &str = r#"Создайте подробное сообщение о фиксации в Git на основе предоставленного diff. Следуйте этим рекомендациям:
1. Первая строка: <тип>(<имя файла/скоп>): <краткое резюме> (не более 50 символов).
2. Типы:
- feat: for new features or significant updates
- fix: for bug fixes
- docs: for documentation changes
- style: for formatting, missing semi-colons, etc.
- refactor: for restructuring code without changing its behavior
- test: for adding or changing tests
- chore: for small tasks, maintenance, or trivial changes
- perf: for performance improvements
- ci: for CI/CD pipeline updates
- build: for changes that affect the build system or dependencies
3. Оставьте пустую строку после первой строки
4. Последующие строки: подробное описание (обернуть в 72 символа)
5. Используйте повелительное наклонение во всех строках
6. Объясняйте, что и почему, а не как.
7. Упоминайте существенные изменения и их влияние
8. упоминайте имя файла в области видимости без префикса и без номеров строк
9. Не более 5 строк (включая пустую строку)

Примеры:
1. Diff: Реализована функциональность регистрации и входа пользователей
   Сообщение: feat(index): Добавил систему аутентификации пользователей

   Реализовал безопасные процессы регистрации и входа
   Интегрировал проверку электронной почты для новых аккаунтов
   Повысил общую безопасность приложения

2. Diff: Исправлен критический баг, вызывающий потерю данных при резервном копировании
   Сообщение: fix(index): Устранил проблему потери данных при резервировании

   Обнаружил и исправил уязвимость в процессе резервирования
   Внедрил дополнительные проверки целостности данных
   Улучшил обработку ошибок и логирование для резервных копий

3. Diff: Обновлена документация API с новыми эндпоинтами
   Сообщение: docs(index): Улучшил документацию API

   Добавил описания для недавно реализованных эндпоинтов API
   Включил примеры использования и форматы ответов
   Обновил раздел требований аутентификации

4. Diff: Рефакторинг уровня доступа к базе данных для улучшения производительности
   Сообщение: refactor(index): Оптимизировал операции с базой данных

   Реализовал пул соединений для повышения эффективности
   Переписал неэффективные запросы с использованием индексов
   Добавил уровень кэширования для часто запрашиваемых данных"#;

pub const CUSTOM_TEMPLATE: &str = "{custom_instructions}";
