pub mod nodes {
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const ABSTRACT_CLASS_DECLARATION: &str = "abstract_class_declaration";
    pub const CLASS: &str = "class";
    pub const EXPORT_STATEMENT: &str = "export_statement";
    pub const METHOD_DEFINITION: &str = "method_definition";
    pub const PUBLIC_FIELD_DEFINITION: &str = "public_field_definition";
    pub const REQUIRED_PARAMETER: &str = "required_parameter";
    pub const OPTIONAL_PARAMETER: &str = "optional_parameter";
    pub const ACCESSIBILITY_MODIFIER: &str = "accessibility_modifier";
    pub const STATEMENT_BLOCK: &str = "statement_block";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const IF_STATEMENT: &str = "if_statement";
    pub const FOR_STATEMENT: &str = "for_statement";
    pub const FOR_IN_STATEMENT: &str = "for_in_statement";
    pub const WHILE_STATEMENT: &str = "while_statement";
    pub const DO_STATEMENT: &str = "do_statement";
    pub const ASSIGNMENT_EXPRESSION: &str = "assignment_expression";
    pub const AUGMENTED_ASSIGNMENT_EXPRESSION: &str = "augmented_assignment_expression";
    pub const MEMBER_EXPRESSION: &str = "member_expression";
    pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
    pub const THIS: &str = "this";
    pub const IDENTIFIER: &str = "identifier";
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
    pub const PRIVATE_PROPERTY_IDENTIFIER: &str = "private_property_identifier";
    pub const STRING: &str = "string";
}

pub mod fields {
    pub const NAME: &str = "name";
    pub const BODY: &str = "body";
    pub const PARAMETERS: &str = "parameters";
    pub const PATTERN: &str = "pattern";
    pub const LEFT: &str = "left";
    pub const OBJECT: &str = "object";
    pub const PROPERTY: &str = "property";
    pub const CONSEQUENCE: &str = "consequence";
    pub const ALTERNATIVE: &str = "alternative";
}

pub mod tokens {
    pub const READONLY: &str = "readonly";
    pub const STATIC: &str = "static";
    pub const GET: &str = "get";
    pub const SET: &str = "set";
}

pub const CONSTRUCTOR_KEY: &str = "constructor";
