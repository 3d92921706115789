//! Built-in scenario catalogue
//!
//! Hand-authored operation scripts covering the core dictionary surface
//! and every extended operation. Scripts that return key collections sort
//! them first: the harness compares sequences order-sensitively, and key
//! enumeration order is not part of the API contract being tested.

use crate::scenario::Scenario;
use kvparity_core::{Capability, DictResult, KvDict, Value};

/// All built-in scenarios, in execution order
pub fn catalogue() -> Vec<Scenario> {
    vec![
        Scenario::new("set_key", &[], set_key),
        Scenario::new("set_and_get_key", &[], set_and_get_key),
        Scenario::new("set_and_get_key_integer", &[], set_and_get_key_integer),
        Scenario::new("get_missing_key", &[], get_missing_key),
        Scenario::new("del_missing_key", &[], del_missing_key),
        Scenario::new("set_then_del_missing_key", &[], set_then_del_missing_key),
        Scenario::new("set_and_multi_get", &[Capability::MultiGet], set_and_multi_get),
        Scenario::new("chain_set", &[Capability::ChainSet], chain_set),
        Scenario::new(
            "chain_set_and_get",
            &[Capability::ChainSet, Capability::ChainGet],
            chain_set_and_get,
        ),
        Scenario::new("chain_del", &[Capability::ChainDel], chain_del),
        Scenario::new(
            "chain_set_and_del",
            &[Capability::ChainSet, Capability::ChainDel],
            chain_set_and_del,
        ),
        Scenario::new("list_keys_sorted", &[Capability::ListKeys], list_keys_sorted),
        Scenario::new("many_keys_sorted", &[Capability::ListKeys], many_keys_sorted),
    ]
}

fn set_key(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("foo", Value::from("bar"))?;
    Ok(None)
}

fn set_and_get_key(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("foo", Value::from("bar"))?;
    dict.get_item("foo").map(Some)
}

fn set_and_get_key_integer(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("foo", Value::Int(1234))?;
    dict.get_item("foo").map(Some)
}

fn get_missing_key(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.get_item("foo").map(Some)
}

fn del_missing_key(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.del_item("foo")?;
    Ok(None)
}

fn set_then_del_missing_key(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("kept", Value::from("still-here"))?;
    dict.del_item("ghost")?;
    Ok(None)
}

fn set_and_multi_get(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("foo1", Value::from("bar"))?;
    dict.set_item("foo2", Value::from("baz"))?;
    dict.multi_get("foo").map(|values| Some(Value::Array(values)))
}

fn chain_set(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.chain_set(&["layer1", "layer2"], Value::from("melons"))?;
    Ok(None)
}

fn chain_set_and_get(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.chain_set(&["layer1", "layer2"], Value::from("melons"))?;
    dict.chain_get(&["layer1", "layer2"]).map(Some)
}

fn chain_del(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.chain_del(&["layer1", "layer2"])?;
    Ok(None)
}

fn chain_set_and_del(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.chain_set(&["layer1", "layer2"], Value::from("melons"))?;
    dict.chain_del(&["layer1", "layer2"])?;
    Ok(None)
}

fn list_keys_sorted(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    dict.set_item("foo", Value::from("bar"))?;
    dict.set_item("john", Value::from("doe"))?;
    let mut keys = dict.list_keys()?;
    keys.sort_unstable();
    Ok(Some(Value::from(keys)))
}

fn many_keys_sorted(dict: &mut dyn KvDict) -> DictResult<Option<Value>> {
    for i in 0..100i64 {
        dict.set_item(&i.to_string(), Value::Int(i))?;
    }
    let mut keys = dict.list_keys()?;
    keys.sort_unstable();
    Ok(Some(Value::from(keys)))
}
