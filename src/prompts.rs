use crate::catalog::{COMPONENTS, WORKED_EXAMPLES};

const DESCRIBE_PROMPT: &str = "Describe the attached screenshot in detail. \
I will send what you give me to a developer to recreate the original screenshot of a website \
that I sent you. Please listen very carefully. It's very important for my job that you follow \
these instructions:

- Think step by step and describe the UI in great detail.
- Make sure to describe where everything is in the UI so the developer can recreate it.
- Pay close attention to background color, text color, font size, font family, padding, \
margin, border, etc. Match the colors and sizes exactly.
- Make sure to mention every part of the screenshot including any headers, footers, sidebars, etc.
- Make sure to use the exact text from the screenshot.";

const CODE_PROMPT_HEAD: &str = "You are an expert frontend React engineer who is also a great \
UI/UX designer. Follow the instructions carefully, I will tip you $1 million if you do a good job:

- Think carefully step by step.
- Create a React component for whatever the user asked you to create and make sure it can run \
by itself by using a default export.
- Make sure the React app is interactive and functional by creating state when needed and \
having no required props.
- If you use any imports from React like useState or useEffect, make sure to import them directly.
- Use TypeScript as the language for the React component.
- Use Tailwind classes for styling. DO NOT USE ARBITRARY VALUES (e.g. `h-[600px]`). Make sure \
to use a consistent color palette.
- Use Tailwind margin and padding classes to style the components and ensure the components \
are spaced out nicely.
- Please ONLY return the full React code starting with the imports, nothing else. It's very \
important for my job that you only return the React code with imports.";

const COMPONENTS_INTRO: &str = "There are some prestyled components available for use. \
Please use your best judgement to use any of these components if the app calls for one.

Here are the components that are available, along with how to import them, and how to use them:";

const EXAMPLES_INTRO: &str = "Here are some examples of a good response:";

const TRAILING_INSTRUCTION: &str = "Please ONLY return the full React code starting with the \
imports, nothing else. It's very important for my job that you only return the React code with \
imports. DO NOT START WITH ```typescript or ```javascript or ```tsx or ```.";

/// Fixed instruction for the screenshot description stage.
pub fn describe_prompt() -> &'static str {
    DESCRIBE_PROMPT
}

/// Instruction for the code stage. `description` is embedded verbatim.
pub fn code_prompt(description: &str, use_components: bool) -> String {
    let mut prompt = String::from(CODE_PROMPT_HEAD);

    if use_components {
        prompt.push_str("\n\n");
        prompt.push_str(COMPONENTS_INTRO);
        for component in COMPONENTS {
            prompt.push_str(&format!(
                "\n\n<component>\n<name>\n{}\n</name>\n<import-instructions>\n{}\n</import-instructions>\n<usage-instructions>\n{}\n</usage-instructions>\n</component>",
                component.name, component.import_docs, component.usage_docs
            ));
        }

        prompt.push_str("\n\n");
        prompt.push_str(EXAMPLES_INTRO);
        for example in WORKED_EXAMPLES {
            prompt.push_str(&format!(
                "\n\n<example>\n<input>\n{}\n</input>\n<output>\n{}\n</output>\n</example>",
                example.description, example.code
            ));
        }
    } else {
        prompt.push_str("\n- Do not import any libraries or dependencies other than React.");
    }

    prompt.push_str("\n\nHere is the description of the UI to build:\n\n");
    prompt.push_str(description);
    prompt.push_str("\n\n");
    prompt.push_str(TRAILING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "A dark navbar with a logo on the left and three links on the right.";

    #[test]
    fn components_listed_only_when_requested() {
        let with = code_prompt(DESCRIPTION, true);
        let without = code_prompt(DESCRIPTION, false);

        for component in COMPONENTS {
            assert!(with.contains(component.name), "missing {}", component.name);
            assert!(with.contains(component.import_docs));
            assert!(
                !without.contains(component.name),
                "unexpected {}",
                component.name
            );
        }
        for example in WORKED_EXAMPLES {
            assert!(with.contains(example.code));
            assert!(!without.contains(example.description));
        }
    }

    #[test]
    fn description_is_embedded_verbatim_before_trailer() {
        let prompt = code_prompt(DESCRIPTION, false);
        let at = prompt.find(DESCRIPTION).unwrap();
        assert!(prompt.ends_with(TRAILING_INSTRUCTION));
        assert!(at < prompt.len() - TRAILING_INSTRUCTION.len());
        assert_eq!(prompt, code_prompt(DESCRIPTION, false));
    }

    #[test]
    fn describe_prompt_asks_for_exact_text() {
        assert!(describe_prompt().contains("exact text"));
    }
}
