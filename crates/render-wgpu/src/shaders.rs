/// WGSL shader for vertex-colored meshes lit by up to four point lights.
///
/// Group 0 holds per-frame data, group 1 the per-draw transform and material.
pub const MESH_SHADER: &str = r#"
struct PointLight {
    position: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    // constant, linear, quadratic
    attenuation: vec4<f32>,
};

struct FrameUniforms {
    view_proj: mat4x4<f32>,
    view_pos: vec4<f32>,
    lights: array<PointLight, 4>,
    light_count: u32,
};

struct ObjectUniforms {
    model: mat4x4<f32>,
    normal: mat4x4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    // rgb specular, w shininess
    specular: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var<uniform> obj: ObjectUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
    @location(2) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = obj.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = frame.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = (obj.normal * vec4<f32>(vertex.normal, 0.0)).xyz;
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.world_normal);
    let view_dir = normalize(frame.view_pos.xyz - in.world_pos);
    let count = min(frame.light_count, 4u);

    var lit = vec3<f32>(0.0);
    for (var i = 0u; i < count; i = i + 1u) {
        let light = frame.lights[i];
        let to_light = light.position.xyz - in.world_pos;
        let distance = length(to_light);
        let light_dir = to_light / distance;
        let k = light.attenuation;
        let attenuation = 1.0 / (k.x + k.y * distance + k.z * distance * distance);

        let ambient = light.ambient.rgb * obj.ambient.rgb;
        let diffuse = light.diffuse.rgb * max(dot(normal, light_dir), 0.0) * obj.diffuse.rgb;
        let reflect_dir = reflect(-light_dir, normal);
        let shine = pow(max(dot(view_dir, reflect_dir), 0.0), obj.specular.w);
        let specular = light.specular.rgb * shine * obj.specular.rgb;

        lit = lit + (ambient + diffuse + specular) * attenuation;
    }
    return vec4<f32>(lit * in.color, 1.0);
}
"#;
