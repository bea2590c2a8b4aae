//! Identifier case conversion for code generation
//!
//! These helpers derive every identifier variant a template needs from the
//! entity name the user typed. They are pure and never fail.

/// Word delimiters recognised by [`CaseConverter::to_pascal_case`]
const WORD_DELIMITERS: [char; 3] = ['_', '-', ' '];

/// Suffix appended to the snake-case entity name to form a table name
const TABLE_SUFFIX: &str = "s";

/// Case conversion helpers used to build template fill data
pub struct CaseConverter;

impl CaseConverter {
    /// Convert string to `PascalCase`
    ///
    /// Splits on `_`, `-` and space. Each word has its first character
    /// upper-cased and the remainder lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::scaffold::helpers::CaseConverter;
    /// assert_eq!(CaseConverter::to_pascal_case("order_item"), "OrderItem");
    /// assert_eq!(CaseConverter::to_pascal_case("user-profile"), "UserProfile");
    /// assert_eq!(CaseConverter::to_pascal_case("HTTPRequest"), "Httprequest");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input
            .split(WORD_DELIMITERS)
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                let Some(first) = chars.next() else {
                    return String::new();
                };
                let rest = chars.as_str().to_lowercase();
                first.to_uppercase().chain(rest.chars()).collect::<String>()
            })
            .collect()
    }

    /// Convert string to camelCase
    ///
    /// This is [`Self::to_pascal_case`] with only its first character lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::scaffold::helpers::CaseConverter;
    /// assert_eq!(CaseConverter::to_camel_case("order_item"), "orderItem");
    /// assert_eq!(CaseConverter::to_camel_case("Product"), "product");
    /// assert_eq!(CaseConverter::to_camel_case(""), "");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        let pascal = Self::to_pascal_case(input);
        let mut chars = pascal.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }

    /// Convert string to `snake_case`
    ///
    /// An underscore is inserted before every upper-case character except the
    /// first, then everything is lower-cased. Runs of capitals are not
    /// collapsed, so acronyms get one underscore per letter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::scaffold::helpers::CaseConverter;
    /// assert_eq!(CaseConverter::to_snake_case("OrderItem"), "order_item");
    /// assert_eq!(CaseConverter::to_snake_case("product"), "product");
    /// assert_eq!(CaseConverter::to_snake_case("HTTPRequest"), "h_t_t_p_request");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        let mut output = String::with_capacity(input.len() + 4);
        for (index, ch) in input.chars().enumerate() {
            if index > 0 && ch.is_uppercase() {
                output.push('_');
            }
            output.extend(ch.to_lowercase());
        }
        output
    }

    /// Convert an entity name to its table name (`snake_case` plus `s`)
    ///
    /// Pluralisation is a plain suffix; irregular plurals are not handled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layergen::scaffold::helpers::CaseConverter;
    /// assert_eq!(CaseConverter::to_table_name("Product"), "products");
    /// assert_eq!(CaseConverter::to_table_name("OrderItem"), "order_items");
    /// assert_eq!(CaseConverter::to_table_name("Category"), "categorys");
    /// ```
    #[must_use]
    pub fn to_table_name(entity: &str) -> String {
        let mut table = Self::to_snake_case(entity);
        table.push_str(TABLE_SUFFIX);
        table
    }
}
