use std::collections::HashMap;

use lambda_http::{Context, Request};

use crate::models::arn::{Arn, ARN_PREFIX};
use crate::models::errors::ArnError;
use crate::utilities::config;

/// Shortest input worth qualifying; anything below this passes through untouched.
const MIN_QUALIFIABLE_LEN: usize = 5;

/// Takes a name or ARN and returns a Lambda function ARN.
pub fn lambda_arn(
    region: Option<&str>,
    account_id: Option<&str>,
    name_or_arn: Option<&str>,
) -> Option<String> {
    create_arn(region, account_id, name_or_arn, |region, account_id, name| {
        format!("arn:aws:lambda:{}:{}:function:{}", region, account_id, name)
    })
}

/// Takes a name or ARN and returns a Step Functions state machine ARN.
pub fn step_arn(
    region: Option<&str>,
    account_id: Option<&str>,
    name_or_arn: Option<&str>,
) -> Option<String> {
    create_arn(region, account_id, name_or_arn, |region, account_id, name| {
        format!("arn:aws:states:{}:{}:stateMachine:{}", region, account_id, name)
    })
}

/// Takes a name or ARN and returns an IAM role ARN. Roles carry no region,
/// so the account rides in the first slot and the region slot stays empty.
pub fn role_arn(account_id: Option<&str>, name_or_arn: Option<&str>) -> Option<String> {
    create_arn(account_id, Some(""), name_or_arn, |account_id, _, name| {
        format!("arn:aws:iam::{}:role/{}", account_id, name)
    })
}

/// Like `lambda_arn`, with region and account taken from the Lambda environment.
pub fn lambda_arn_from_env(name_or_arn: Option<&str>) -> Option<String> {
    let region = config::get_aws_region();
    let account_id = config::get_aws_account_id();
    lambda_arn(region.as_deref(), account_id.as_deref(), name_or_arn)
}

/// Like `step_arn`, with region and account taken from the Lambda environment.
pub fn step_arn_from_env(name_or_arn: Option<&str>) -> Option<String> {
    let region = config::get_aws_region();
    let account_id = config::get_aws_account_id();
    step_arn(region.as_deref(), account_id.as_deref(), name_or_arn)
}

/// Like `role_arn`, with the account taken from the Lambda environment.
pub fn role_arn_from_env(name_or_arn: Option<&str>) -> Option<String> {
    let account_id = config::get_aws_account_id();
    role_arn(account_id.as_deref(), name_or_arn)
}

fn create_arn(
    region: Option<&str>,
    account_id: Option<&str>,
    name_or_arn: Option<&str>,
    render: impl FnOnce(&str, &str, &str) -> String,
) -> Option<String> {
    let name = name_or_arn?;
    if name.len() < MIN_QUALIFIABLE_LEN || name.starts_with(ARN_PREFIX) {
        return Some(name.to_string());
    }

    match (region, account_id) {
        (Some(region), Some(account_id)) => Some(render(region, account_id, name)),
        _ => Some(name.to_string()),
    }
}

/// Replaces every `{{aws_region}}`, `{{aws_account}}` and `{{lambda_name}}`
/// placeholder in the template and returns the rendered string. All three
/// values are required, whether or not their placeholder occurs.
pub fn interpolate_arn_variables(
    template: &str,
    region: Option<&str>,
    account_id: Option<&str>,
    lambda_name: Option<&str>,
) -> Result<String, ArnError> {
    let variables = HashMap::from([
        ("{{aws_account}}", account_id),
        ("{{aws_region}}", region),
        ("{{lambda_name}}", lambda_name),
    ]);

    let mut rendered = template.to_string();
    for (placeholder, value) in variables {
        let value = value.ok_or(ArnError::MissingVariable(placeholder))?;
        rendered = rendered.replace(placeholder, value);
    }
    Ok(rendered)
}

/// Extracts the path portion of an ARN's resource, between the leading
/// type/name segment and the final one. `/` when there is no middle.
pub fn arn_path(arn: &str) -> String {
    let (_, _, resource) = arn_region_account_resource(arn);

    let segments: Vec<&str> = resource.split('/').collect();
    if segments.len() <= 2 {
        return "/".to_string();
    }
    format!("/{}/", segments[1..segments.len() - 1].join("/"))
}

/// Region and account of the invoked function, read from the Lambda context
/// the runtime stores in the request extensions. Both absent when no context
/// is attached.
pub fn aws_region_account_from_context(event: &Request) -> (Option<String>, Option<String>) {
    match event.extensions().get::<Context>() {
        Some(context) => {
            let (region, account_id, _) = arn_region_account_resource(&context.invoked_function_arn);
            (Some(region), Some(account_id))
        }
        None => (None, None),
    }
}

/// Lenient decomposition into (region, account, resource). Malformed input
/// yields three empty strings.
pub fn arn_region_account_resource(arn: &str) -> (String, String, String) {
    match Arn::parse(arn) {
        Ok(parsed) => (parsed.region, parsed.account_id, parsed.resource),
        Err(_) => (String::new(), String::new(), String::new()),
    }
}
